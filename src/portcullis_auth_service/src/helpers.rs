use portcullis_adapters::config::Settings;
use redis::{Client, RedisResult};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Connect to PostgreSQL and run all pending migrations.
pub async fn configure_postgresql(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    let pg_pool = get_postgres_pool(settings.postgres.url.expose_secret()).await?;

    sqlx::migrate!("../portcullis_adapters/migrations")
        .run(&pg_pool)
        .await?;

    Ok(pg_pool)
}

/// Open a connection to the configured Redis host.
pub fn configure_redis(settings: &Settings) -> RedisResult<redis::Connection> {
    get_redis_client(&settings.redis.host_name)?.get_connection()
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}

use std::sync::Arc;

use color_eyre::eyre::Result;
use portcullis_adapters::{
    Argon2PasswordHasher, HashMapSessionStore, HashMapUserStore, PostgresUserStore,
    RedisSessionStore,
    config::{Settings, StorageBackend},
};
use portcullis_auth_service::{AuthService, configure_postgresql, configure_redis, init_tracing};
use tokio::sync::Mutex;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;
    let cookie_name = settings.session.cookie_name.as_str();
    let hasher = Argon2PasswordHasher::new();

    let auth_service = match settings.storage.backend {
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory stores; all accounts and sessions are lost on exit");
            AuthService::new(
                HashMapUserStore::new(),
                hasher,
                HashMapSessionStore::new(),
                cookie_name,
            )
        }
        StorageBackend::Persistent => {
            let pg_pool = configure_postgresql(&settings).await?;
            let redis_conn = Arc::new(Mutex::new(configure_redis(&settings)?));

            AuthService::new(
                PostgresUserStore::new(pg_pool),
                hasher,
                RedisSessionStore::new(redis_conn, settings.session.time_to_live_secs),
                cookie_name,
            )
        }
    };

    let listener = tokio::net::TcpListener::bind(&settings.application.address).await?;
    tracing::info!(backend = ?settings.storage.backend, "Starting portcullis");

    auth_service
        .run_standalone(listener, settings.allowed_origins())
        .await?;

    Ok(())
}

use portcullis_core::{Email, NewUser, PasswordDigest, User, UserId, UserStore, UserStoreError};
use secrecy::ExposeSecret;
use sqlx::{PgPool, Pool, Postgres, Row, postgres::PgRow};

#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

fn user_from_row(row: &PgRow) -> Result<User, UserStoreError> {
    let unexpected = |e: sqlx::Error| UserStoreError::UnexpectedError(e.to_string());

    let id: uuid::Uuid = row.try_get("id").map_err(unexpected)?;
    let email: String = row.try_get("email").map_err(unexpected)?;
    let password_hash: String = row.try_get("password_hash").map_err(unexpected)?;
    let is_admin: bool = row.try_get("is_admin").map_err(unexpected)?;

    let email =
        Email::try_from(email).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;
    Ok(User::new(
        UserId::from(id),
        email,
        PasswordDigest::new(password_hash),
        is_admin,
    ))
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Retrieving user by email from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, is_admin
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.as_ref().map(user_from_row).transpose()
    }

    #[tracing::instrument(name = "Retrieving user by id from PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query(
            r#"
                SELECT id, email, password_hash, is_admin
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.as_ref().map(user_from_row).transpose()
    }

    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn insert(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        let id = UserId::new();

        let query = sqlx::query(
            r#"
                INSERT INTO users (id, email, password_hash, is_admin)
                VALUES ($1, $2, $3, FALSE)
            "#,
        )
        .bind(*id.as_uuid())
        .bind(user.email().as_str())
        .bind(user.password_digest().expose_secret());

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(id)
    }
}

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{password::Password, password_digest::PasswordDigest};

#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
    #[error("Hashing task failed: {0}")]
    TaskFailed(String),
}

/// Salted, deliberately slow one-way hashing of passwords.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash with a fresh random salt; two calls on the same input differ.
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError>;

    /// Check `password` against `digest` in constant time.
    ///
    /// A malformed digest is a mismatch (`Ok(false)`), not an error.
    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError>;
}

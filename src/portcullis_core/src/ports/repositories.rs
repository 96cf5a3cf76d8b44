use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    session::{SessionId, SessionRecord},
    user::{NewUser, User, UserId},
};

// UserStore port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

/// Persistence of user accounts.
///
/// Implementations must enforce email uniqueness themselves: `insert` fails
/// with [`UserStoreError::UserAlreadyExists`] when the email is taken, even
/// if a caller checked beforehand.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError>;
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError>;
    async fn insert(&self, user: NewUser) -> Result<UserId, UserStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Could not decode session record: {0}")]
    Corrupted(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Persistence of session records keyed by their opaque id.
///
/// Expiry is entirely up to the implementation.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError>;
    /// Durably write the record. Returns only once the write is visible to
    /// subsequent `load` calls.
    async fn commit(&self, id: &SessionId, record: &SessionRecord)
    -> Result<(), SessionStoreError>;
    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError>;
}

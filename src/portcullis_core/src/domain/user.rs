use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::{email::Email, password_digest::PasswordDigest};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Email must not be empty")]
    EmptyEmail,
    #[error("Password must not be empty")]
    EmptyPassword,
    #[error("Invalid user id: {0}")]
    InvalidId(String),
}

/// Stable identifier assigned by the [`crate::UserStore`] at insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl TryFrom<&str> for UserId {
    type Error = UserError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| UserError::InvalidId(value.to_string()))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A registered account as persisted by the user store.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    email: Email,
    password_digest: PasswordDigest,
    is_admin: bool,
}

impl User {
    pub fn new(id: UserId, email: Email, password_digest: PasswordDigest, is_admin: bool) -> Self {
        Self {
            id,
            email,
            password_digest,
            is_admin,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    pub fn is_admin(&self) -> bool {
        self.is_admin
    }
}

/// A user about to be inserted.
///
/// There is no way to request admin rights here: accounts created through
/// signup are always regular users.
#[derive(Debug, Clone)]
pub struct NewUser {
    email: Email,
    password_digest: PasswordDigest,
}

impl NewUser {
    pub fn new(email: Email, password_digest: PasswordDigest) -> Self {
        Self {
            email,
            password_digest,
        }
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_digest(&self) -> &PasswordDigest {
        &self.password_digest
    }

    /// Materialize the stored record once the store has picked an id.
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.email, self.password_digest, false)
    }
}

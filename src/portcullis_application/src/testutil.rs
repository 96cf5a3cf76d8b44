//! Shared test helpers for the `#[cfg(test)]` modules of this crate.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use portcullis_core::{
    Email, NewUser, Password, PasswordDigest, PasswordHasher, PasswordHasherError, SessionId,
    SessionRecord, SessionStore, SessionStoreError, SessionUser, User, UserId, UserStore,
    UserStoreError,
};
use secrecy::ExposeSecret;
use tokio::sync::RwLock;

pub fn email(raw: &str) -> Email {
    Email::try_from(raw).unwrap()
}

pub fn session_user(raw_email: &str) -> SessionUser {
    SessionUser {
        id: UserId::new(),
        email: email(raw_email),
    }
}

/// Cheap stand-in for a real hasher: the "salt" is a counter and the digest
/// is `salt$plaintext`.
#[derive(Default)]
pub struct MockHasher {
    salt: AtomicU64,
}

impl MockHasher {
    pub fn digest(&self, plaintext: &str) -> PasswordDigest {
        let salt = self.salt.fetch_add(1, Ordering::Relaxed);
        PasswordDigest::new(format!("{salt}${plaintext}"))
    }
}

#[async_trait::async_trait]
impl PasswordHasher for MockHasher {
    async fn hash(&self, password: &Password) -> Result<PasswordDigest, PasswordHasherError> {
        Ok(self.digest(password.as_ref().expose_secret()))
    }

    async fn verify(
        &self,
        password: &Password,
        digest: &PasswordDigest,
    ) -> Result<bool, PasswordHasherError> {
        Ok(digest
            .expose_secret()
            .split_once('$')
            .is_some_and(|(_, plaintext)| plaintext == password.as_ref().expose_secret()))
    }
}

#[derive(Clone, Default)]
pub struct MockUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
    /// Pretend the pre-insert lookup raced with another signup.
    blind_lookup: bool,
    failing: bool,
    id_lookups: Arc<AtomicUsize>,
}

impl MockUserStore {
    pub fn blind_lookup() -> Self {
        Self {
            blind_lookup: true,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub async fn add(&self, raw_email: &str, digest: PasswordDigest, is_admin: bool) -> UserId {
        let id = UserId::new();
        let user = User::new(id, email(raw_email), digest, is_admin);
        self.users.write().await.insert(id, user);
        id
    }

    pub async fn remove(&self, id: &UserId) {
        self.users.write().await.remove(id);
    }

    /// Number of `find_by_id` calls so far.
    pub fn lookups(&self) -> usize {
        self.id_lookups.load(Ordering::Relaxed)
    }

    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    fn check(&self) -> Result<(), UserStoreError> {
        if self.failing {
            return Err(UserStoreError::UnexpectedError("store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UserStore for MockUserStore {
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        self.check()?;
        if self.blind_lookup {
            return Ok(None);
        }
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email() == email).cloned())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        self.id_lookups.fetch_add(1, Ordering::Relaxed);
        self.check()?;
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn insert(&self, user: NewUser) -> Result<UserId, UserStoreError> {
        self.check()?;
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        let id = UserId::new();
        users.insert(id, user.into_user(id));
        Ok(id)
    }
}

#[derive(Clone, Default)]
pub struct MockSessionStore {
    records: Arc<RwLock<HashMap<SessionId, SessionRecord>>>,
    failing: bool,
}

impl MockSessionStore {
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub async fn insert(&self, id: SessionId, record: SessionRecord) {
        self.records.write().await.insert(id, record);
    }

    pub async fn get(&self, id: &SessionId) -> Option<SessionRecord> {
        self.records.read().await.get(id).cloned()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check(&self) -> Result<(), SessionStoreError> {
        if self.failing {
            return Err(SessionStoreError::DatabaseError("store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl SessionStore for MockSessionStore {
    async fn load(&self, id: &SessionId) -> Result<Option<SessionRecord>, SessionStoreError> {
        self.check()?;
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn commit(
        &self,
        id: &SessionId,
        record: &SessionRecord,
    ) -> Result<(), SessionStoreError> {
        self.check()?;
        self.records.write().await.insert(id.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.check()?;
        self.records.write().await.remove(id);
        Ok(())
    }
}

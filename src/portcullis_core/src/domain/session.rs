use std::fmt;

use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{email::Email, flash::FlashPayload, user::UserId};

/// Opaque session identifier handed to the client in the session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub const LENGTH: usize = 32;

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        let id = rand::rng()
            .sample_iter(Alphanumeric)
            .take(Self::LENGTH)
            .map(char::from)
            .collect();
        Self(id)
    }

    /// Accept an inbound identifier only if it has the shape we issue.
    ///
    /// Anything else is treated by callers as "no session".
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed =
            raw.len() == Self::LENGTH && raw.bytes().all(|b| b.is_ascii_alphanumeric());
        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of the logged-in user kept inside the session.
///
/// This is a weak reference: it may go stale if the user record changes
/// afterwards, which is why admin checks always re-read the user store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: UserId,
    pub email: Email,
}

/// Persisted shape of a session, as handed to and read from a `SessionStore`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    #[serde(default)]
    pub user: Option<SessionUser>,
    #[serde(default)]
    pub is_authenticated: bool,
    #[serde(default)]
    pub flash: Option<FlashPayload>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionRecordError {
    #[error("Session is marked authenticated but carries no user")]
    AuthenticatedWithoutUser,
}

/// Server-side state of one client.
///
/// Invariant: `is_authenticated()` implies `user().is_some()`. The fields are
/// private so the only ways to change them keep that invariant.
#[derive(Debug, Clone)]
pub struct Session {
    id: SessionId,
    user: Option<SessionUser>,
    is_authenticated: bool,
    flash: Option<FlashPayload>,
    fresh: bool,
    committed: bool,
    modified: bool,
}

impl Session {
    /// A brand new anonymous session that has not been stored yet.
    pub fn anonymous(id: SessionId) -> Self {
        Self {
            id,
            user: None,
            is_authenticated: false,
            flash: None,
            fresh: true,
            committed: false,
            modified: false,
        }
    }

    /// Rebuild a session loaded from the store.
    pub fn restore(id: SessionId, record: SessionRecord) -> Result<Self, SessionRecordError> {
        if record.is_authenticated && record.user.is_none() {
            return Err(SessionRecordError::AuthenticatedWithoutUser);
        }
        Ok(Self {
            id,
            user: record.user,
            is_authenticated: record.is_authenticated,
            flash: record.flash,
            fresh: false,
            committed: false,
            modified: false,
        })
    }

    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            user: self.user.clone(),
            is_authenticated: self.is_authenticated,
            flash: self.flash.clone(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn user(&self) -> Option<&SessionUser> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    /// The logged-in user, if and only if the session is authenticated.
    pub fn authenticated_user(&self) -> Option<&SessionUser> {
        self.user.as_ref().filter(|_| self.is_authenticated)
    }

    /// True if the session was created during this request.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    /// True if the session has unsaved changes.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// The client must be told about this session: it was issued during this
    /// request and now exists in the store.
    pub fn needs_cookie(&self) -> bool {
        self.fresh && self.committed
    }

    pub fn authenticate(&mut self, user: SessionUser) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.modified = true;
    }

    /// Drop the authentication state. The session id stays valid.
    pub fn clear_authentication(&mut self) {
        if self.user.is_some() || self.is_authenticated {
            self.user = None;
            self.is_authenticated = false;
            self.modified = true;
        }
    }

    /// Store a one-shot payload, replacing any unread one.
    pub fn write_flash(&mut self, payload: FlashPayload) {
        self.flash = Some(payload);
        self.modified = true;
    }

    /// Take the pending payload, or an empty one if none was written.
    ///
    /// The slot is cleared in the same mutation; commit the session for the
    /// clearing to survive the request.
    pub fn read_and_clear_flash(&mut self) -> FlashPayload {
        match self.flash.take() {
            Some(payload) => {
                self.modified = true;
                payload
            }
            None => FlashPayload::default(),
        }
    }

    pub fn mark_committed(&mut self) {
        self.committed = true;
        self.modified = false;
    }
}

use std::sync::Arc;

use portcullis_core::{PasswordHasher, SessionStore, UserStore};

/// Shared router state: the three ports plus the session cookie name.
///
/// Stores are cheap to clone (they share their backing storage), so axum
/// can clone the state per request.
#[derive(Clone)]
pub struct AuthState<U, H, S> {
    pub user_store: U,
    pub hasher: H,
    pub session_store: S,
    pub cookie_name: Arc<str>,
}

impl<U, H, S> AuthState<U, H, S>
where
    U: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
    S: SessionStore + Clone + 'static,
{
    pub fn new(user_store: U, hasher: H, session_store: S, cookie_name: impl Into<Arc<str>>) -> Self {
        Self {
            user_store,
            hasher,
            session_store,
            cookie_name: cookie_name.into(),
        }
    }
}

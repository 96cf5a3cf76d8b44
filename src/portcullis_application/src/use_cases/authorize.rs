use portcullis_core::{
    Access, Denial, Session, User, UserId, UserStore, UserStoreError, ViewerContext,
};

#[derive(Debug, thiserror::Error)]
pub enum AuthorizationError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    /// The session is authenticated as a user the store no longer knows.
    #[error("Session references missing user {0}")]
    IntegrityViolation(UserId),
}

/// Decides whether a request may reach a protected resource.
pub struct AuthorizationGate<'a, U>
where
    U: UserStore,
{
    user_store: &'a U,
}

impl<'a, U> AuthorizationGate<'a, U>
where
    U: UserStore,
{
    pub fn new(user_store: &'a U) -> Self {
        Self { user_store }
    }

    pub fn require_authenticated(&self, session: &Session) -> Access {
        if session.is_authenticated() {
            Access::Allow
        } else {
            Access::Deny(Denial::Unauthorized)
        }
    }

    /// Admin rights are read from the user store on every call, never from
    /// the session snapshot.
    #[tracing::instrument(name = "AuthorizationGate::require_admin", skip_all)]
    pub async fn require_admin(&self, session: &Session) -> Result<Access, AuthorizationError> {
        let (access, _) = self.admin_access(session).await?;
        Ok(access)
    }

    /// Admin decision and navigation flags from a single user lookup.
    #[tracing::instrument(name = "AuthorizationGate::admin_access", skip_all)]
    pub async fn admin_access(
        &self,
        session: &Session,
    ) -> Result<(Access, ViewerContext), AuthorizationError> {
        if let Access::Deny(denial) = self.require_authenticated(session) {
            return Ok((Access::Deny(denial), ViewerContext::default()));
        }

        let Some(user) = self.current_user(session).await? else {
            return Ok((Access::Deny(Denial::Unauthorized), ViewerContext::default()));
        };
        let access = if user.is_admin() {
            Access::Allow
        } else {
            Access::Deny(Denial::Forbidden)
        };

        Ok((
            access,
            ViewerContext {
                is_authenticated: true,
                is_admin: user.is_admin(),
            },
        ))
    }

    /// Navigation flags for page rendering.
    #[tracing::instrument(name = "AuthorizationGate::viewer", skip_all)]
    pub async fn viewer(&self, session: &Session) -> Result<ViewerContext, AuthorizationError> {
        let Some(user) = self.current_user(session).await? else {
            return Ok(ViewerContext::default());
        };
        Ok(ViewerContext {
            is_authenticated: true,
            is_admin: user.is_admin(),
        })
    }

    async fn current_user(&self, session: &Session) -> Result<Option<User>, AuthorizationError> {
        let Some(session_user) = session.authenticated_user() else {
            return Ok(None);
        };

        let user = self
            .user_store
            .find_by_id(&session_user.id)
            .await?
            .ok_or(AuthorizationError::IntegrityViolation(session_user.id))?;

        Ok(Some(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{MockHasher, MockUserStore, email};
    use portcullis_core::{SessionId, SessionUser};

    fn logged_in_as(id: UserId, raw_email: &str) -> Session {
        let mut session = Session::anonymous(SessionId::generate());
        session.authenticate(SessionUser {
            id,
            email: email(raw_email),
        });
        session
    }

    #[tokio::test]
    async fn anonymous_session_is_unauthorized() {
        let users = MockUserStore::default();
        let gate = AuthorizationGate::new(&users);
        let session = Session::anonymous(SessionId::generate());

        assert_eq!(
            gate.require_authenticated(&session),
            Access::Deny(Denial::Unauthorized)
        );
        assert_eq!(
            gate.require_admin(&session).await.unwrap(),
            Access::Deny(Denial::Unauthorized)
        );
    }

    #[tokio::test]
    async fn authenticated_session_is_allowed() {
        let users = MockUserStore::default();
        let hasher = MockHasher::default();
        let id = users.add("a@b.com", hasher.digest("secret1"), false).await;
        let gate = AuthorizationGate::new(&users);

        assert_eq!(
            gate.require_authenticated(&logged_in_as(id, "a@b.com")),
            Access::Allow
        );
    }

    #[tokio::test]
    async fn non_admin_is_forbidden() {
        let users = MockUserStore::default();
        let hasher = MockHasher::default();
        let id = users.add("a@b.com", hasher.digest("secret1"), false).await;
        let gate = AuthorizationGate::new(&users);

        let access = gate
            .require_admin(&logged_in_as(id, "a@b.com"))
            .await
            .unwrap();

        assert_eq!(access, Access::Deny(Denial::Forbidden));
    }

    #[tokio::test]
    async fn admin_is_allowed() {
        let users = MockUserStore::default();
        let hasher = MockHasher::default();
        let id = users.add("root@b.com", hasher.digest("secret1"), true).await;
        let gate = AuthorizationGate::new(&users);

        let access = gate
            .require_admin(&logged_in_as(id, "root@b.com"))
            .await
            .unwrap();

        assert!(access.is_allowed());
    }

    #[tokio::test]
    async fn missing_user_is_an_integrity_violation() {
        let users = MockUserStore::default();
        let hasher = MockHasher::default();
        let id = users.add("a@b.com", hasher.digest("secret1"), true).await;
        users.remove(&id).await;
        let gate = AuthorizationGate::new(&users);
        let session = logged_in_as(id, "a@b.com");

        let admin = gate.require_admin(&session).await;
        let viewer = gate.viewer(&session).await;

        assert!(matches!(admin, Err(AuthorizationError::IntegrityViolation(missing)) if missing == id));
        assert!(matches!(viewer, Err(AuthorizationError::IntegrityViolation(_))));
    }

    #[tokio::test]
    async fn viewer_reflects_current_admin_flag() {
        let users = MockUserStore::default();
        let hasher = MockHasher::default();
        let id = users.add("root@b.com", hasher.digest("secret1"), true).await;
        let gate = AuthorizationGate::new(&users);

        let viewer = gate.viewer(&logged_in_as(id, "root@b.com")).await.unwrap();
        assert_eq!(
            viewer,
            ViewerContext {
                is_authenticated: true,
                is_admin: true
            }
        );

        let anonymous = gate
            .viewer(&Session::anonymous(SessionId::generate()))
            .await
            .unwrap();
        assert_eq!(anonymous, ViewerContext::default());
    }

    #[tokio::test]
    async fn admin_access_uses_a_single_lookup() {
        let users = MockUserStore::default();
        let hasher = MockHasher::default();
        let admin = users.add("root@b.com", hasher.digest("secret1"), true).await;
        let plain = users.add("a@b.com", hasher.digest("secret1"), false).await;
        let gate = AuthorizationGate::new(&users);

        let (access, viewer) = gate
            .admin_access(&logged_in_as(admin, "root@b.com"))
            .await
            .unwrap();
        assert!(access.is_allowed());
        assert!(viewer.is_admin);
        assert_eq!(users.lookups(), 1);

        let (access, viewer) = gate
            .admin_access(&logged_in_as(plain, "a@b.com"))
            .await
            .unwrap();
        assert_eq!(access, Access::Deny(Denial::Forbidden));
        assert_eq!(
            viewer,
            ViewerContext {
                is_authenticated: true,
                is_admin: false
            }
        );
        assert_eq!(users.lookups(), 2);
    }
}

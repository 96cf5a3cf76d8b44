use portcullis_core::{
    FlashPayload, FlowOutcome, LoginForm, PasswordHasher, PasswordHasherError, RedirectTarget,
    RejectionReason, Session, SessionStore, SessionUser, UserStore, UserStoreError,
    validate_login,
};

use crate::session_manager::{SessionError, SessionManager};

/// Error types specific to login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),
}

/// Login use case - handles user authentication
pub struct LoginUseCase<'a, U, H, S>
where
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
{
    user_store: &'a U,
    hasher: &'a H,
    sessions: SessionManager<'a, S>,
}

impl<'a, U, H, S> LoginUseCase<'a, U, H, S>
where
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
{
    pub fn new(user_store: &'a U, hasher: &'a H, session_store: &'a S) -> Self {
        Self {
            user_store,
            hasher,
            sessions: SessionManager::new(session_store),
        }
    }

    /// Execute the login use case
    ///
    /// Unknown email, wrong password and empty fields all end in the same
    /// rejection so the response never tells which one happened. On success
    /// the session is authenticated and committed before the redirect to the
    /// profile page is returned.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        session: &mut Session,
        form: LoginForm,
    ) -> Result<FlowOutcome, LoginError> {
        let credentials = match validate_login(&form) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::debug!(reason = %e, "Login input rejected");
                return self.reject(session, &form).await;
            }
        };

        let Some(user) = self.user_store.find_by_email(&credentials.email).await? else {
            return self.reject(session, &form).await;
        };

        if !self
            .hasher
            .verify(&credentials.password, user.password_digest())
            .await?
        {
            return self.reject(session, &form).await;
        }

        session.authenticate(SessionUser {
            id: user.id(),
            email: user.email().clone(),
        });
        self.sessions.commit(session).await?;

        tracing::info!(user_id = %user.id(), "User logged in");
        Ok(FlowOutcome::Success {
            redirect: RedirectTarget::Profile,
        })
    }

    async fn reject(
        &self,
        session: &mut Session,
        form: &LoginForm,
    ) -> Result<FlowOutcome, LoginError> {
        let reason = RejectionReason::CredentialMismatch;
        session.write_flash(FlashPayload::error(reason.message(), form.echoed_fields()));
        self.sessions.commit(session).await?;

        Ok(FlowOutcome::Rejected {
            reason,
            redirect: RedirectTarget::LoginForm,
        })
    }
}

use portcullis_core::{
    FlashPayload, FlowOutcome, NewUser, PasswordHasher, PasswordHasherError, RedirectTarget,
    RejectionReason, Session, SessionStore, SignupForm, UserStore, UserStoreError,
    validate_signup,
};

use crate::session_manager::{SessionError, SessionManager};

/// Failures that abort signup. Rejections are not errors.
#[derive(Debug, thiserror::Error)]
pub enum SignupError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),
}

/// Signup use case - handles user registration
pub struct SignupUseCase<'a, U, H, S>
where
    U: UserStore,
    H: PasswordHasher,
    S: SessionStore,
{
    user_store: &'a U,
    hasher: &'a H,
    sessions: SessionManager<'a, S>,
}

impl<'a, U, H, S> SignupUseCase<'a, U, H, S>
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

    /// Execute the signup use case
    ///
    /// On rejection the reason and the submitted values are flashed to
    /// `session`, which is committed before the outcome is returned. On
    /// success the user is created and the session is left untouched:
    /// signing up does not log the user in.
    #[tracing::instrument(name = "SignupUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        session: &mut Session,
        form: SignupForm,
    ) -> Result<FlowOutcome, SignupError> {
        let validated = match validate_signup(&form) {
            Ok(validated) => validated,
            Err(e) => {
                tracing::debug!(reason = %e, "Signup input rejected");
                return self
                    .reject(session, &form, RejectionReason::InvalidInput(e))
                    .await;
            }
        };

        // Fast path only; the store's own uniqueness check is authoritative.
        if self
            .user_store
            .find_by_email(&validated.email)
            .await?
            .is_some()
        {
            return self.reject(session, &form, RejectionReason::Conflict).await;
        }

        let digest = self.hasher.hash(&validated.password).await?;

        match self
            .user_store
            .insert(NewUser::new(validated.email, digest))
            .await
        {
            Ok(user_id) => {
                tracing::info!(%user_id, "User registered");
                Ok(FlowOutcome::Success {
                    redirect: RedirectTarget::LoginForm,
                })
            }
            Err(UserStoreError::UserAlreadyExists) => {
                self.reject(session, &form, RejectionReason::Conflict).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn reject(
        &self,
        session: &mut Session,
        form: &SignupForm,
        reason: RejectionReason,
    ) -> Result<FlowOutcome, SignupError> {
        session.write_flash(FlashPayload::error(reason.message(), form.echoed_fields()));
        self.sessions.commit(session).await?;

        Ok(FlowOutcome::Rejected {
            reason,
            redirect: RedirectTarget::SignupForm,
        })
    }
}

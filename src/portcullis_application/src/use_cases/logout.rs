use portcullis_core::{FlowOutcome, RedirectTarget, Session, SessionStore};

use crate::session_manager::{SessionError, SessionManager};

/// Error types for logout use case
#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session error: {0}")]
    SessionError(#[from] SessionError),
}

/// Logout use case - clears the authentication state of a session
pub struct LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    sessions: SessionManager<'a, S>,
}

impl<'a, S> LogoutUseCase<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self {
            sessions: SessionManager::new(session_store),
        }
    }

    /// Execute the logout use case
    ///
    /// Always ends on the home page, whether or not anyone was logged in.
    #[tracing::instrument(name = "LogoutUseCase::execute", skip_all)]
    pub async fn execute(&self, session: &mut Session) -> Result<FlowOutcome, LogoutError> {
        let user_id = session.authenticated_user().map(|user| user.id);

        self.sessions.logout(session).await?;

        if let Some(user_id) = user_id {
            tracing::info!(%user_id, "User logged out");
        }
        Ok(FlowOutcome::Success {
            redirect: RedirectTarget::Home,
        })
    }
}

use portcullis_core::{Session, SessionId, SessionStore, SessionStoreError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Creation, commit and logout of session records.
///
/// Anything that depends on a session write (a redirect to a protected page,
/// a flash message on the next page) must only be produced after
/// [`SessionManager::commit`] has returned.
pub struct SessionManager<'a, S>
where
    S: SessionStore,
{
    session_store: &'a S,
}

impl<'a, S> SessionManager<'a, S>
where
    S: SessionStore,
{
    pub fn new(session_store: &'a S) -> Self {
        Self { session_store }
    }

    /// Load the session named by the inbound id, or start an anonymous one.
    ///
    /// A missing, malformed, unknown or undecodable id yields a fresh
    /// anonymous session. Only store failures are errors.
    #[tracing::instrument(name = "SessionManager::resolve_or_create", skip_all)]
    pub async fn resolve_or_create(&self, raw_id: Option<&str>) -> Result<Session, SessionError> {
        let Some(id) = raw_id.and_then(SessionId::parse) else {
            return Ok(Self::create());
        };

        let record = match self.session_store.load(&id).await {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(Self::create()),
            Err(SessionStoreError::Corrupted(e)) => {
                tracing::warn!(error = %e, "Discarding undecodable session record");
                return Ok(Self::create());
            }
            Err(e) => return Err(e.into()),
        };

        match Session::restore(id, record) {
            Ok(session) => Ok(session),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding inconsistent session record");
                Ok(Self::create())
            }
        }
    }

    /// Durably persist the session.
    #[tracing::instrument(name = "SessionManager::commit", skip_all)]
    pub async fn commit(&self, session: &mut Session) -> Result<(), SessionError> {
        self.session_store
            .commit(session.id(), &session.to_record())
            .await?;
        session.mark_committed();
        Ok(())
    }

    /// Persist the session only if something changed since it was loaded.
    pub async fn commit_if_modified(&self, session: &mut Session) -> Result<(), SessionError> {
        if session.is_modified() {
            self.commit(session).await?;
        }
        Ok(())
    }

    /// Drop the authentication state of the session.
    ///
    /// The record is kept and its id is not rotated; the client goes on using
    /// the same id as an anonymous session. Logging out an anonymous session
    /// does nothing.
    #[tracing::instrument(name = "SessionManager::logout", skip_all)]
    pub async fn logout(&self, session: &mut Session) -> Result<(), SessionError> {
        session.clear_authentication();
        self.commit_if_modified(session).await
    }

    fn create() -> Session {
        Session::anonymous(SessionId::generate())
    }
}

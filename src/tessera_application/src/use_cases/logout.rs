use tessera_core::{SessionId, SessionStore, SessionStoreError};

#[derive(Debug, thiserror::Error)]
pub enum LogoutError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Ends the session the caller's token is bound to.
pub struct LogoutUseCase<'a, S>
where
    S: SessionStore + ?Sized,
{
    sessions: &'a S,
}

impl<'a, S> LogoutUseCase<'a, S>
where
    S: SessionStore + ?Sized,
{
    pub fn new(sessions: &'a S) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(name = "LogoutUseCase::execute", skip(self))]
    pub async fn execute(&self, session_id: &SessionId) -> Result<(), LogoutError> {
        self.sessions.revoke_session(session_id).await?;
        Ok(())
    }
}

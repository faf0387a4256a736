use tessera_core::{SessionId, SessionStore, SessionStoreError, UserId};

use crate::dto::{ActiveSessionsResponse, SessionSummary};

#[derive(Debug, thiserror::Error)]
pub enum ViewActiveSessionsError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

pub struct ViewActiveSessionsUseCase<'a, S>
where
    S: SessionStore + ?Sized,
{
    sessions: &'a S,
}

impl<'a, S> ViewActiveSessionsUseCase<'a, S>
where
    S: SessionStore + ?Sized,
{
    pub fn new(sessions: &'a S) -> Self {
        Self { sessions }
    }

    /// Lists the user's sessions, newest first, flagging `current_session`.
    #[tracing::instrument(name = "ViewActiveSessionsUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
        current_session: &SessionId,
    ) -> Result<ActiveSessionsResponse, ViewActiveSessionsError> {
        let mut sessions = self.sessions.list_sessions(user_id).await?;
        sessions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let sessions: Vec<SessionSummary> = sessions
            .iter()
            .map(|session| SessionSummary::new(session, current_session))
            .collect();
        let current_session_count = sessions.iter().filter(|session| session.current).count();

        Ok(ActiveSessionsResponse {
            total_count: sessions.len(),
            current_session_count,
            sessions,
        })
    }
}

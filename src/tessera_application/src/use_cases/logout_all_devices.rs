use chrono::Utc;
use tessera_core::{SessionStore, SessionStoreError, UserId};

use crate::dto::LogoutAllDevicesResponse;

#[derive(Debug, thiserror::Error)]
pub enum LogoutAllDevicesError {
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
}

/// Ends every session of the user, including the calling one.
pub struct LogoutAllDevicesUseCase<'a, S>
where
    S: SessionStore + ?Sized,
{
    sessions: &'a S,
}

impl<'a, S> LogoutAllDevicesUseCase<'a, S>
where
    S: SessionStore + ?Sized,
{
    pub fn new(sessions: &'a S) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(name = "LogoutAllDevicesUseCase::execute", skip(self))]
    pub async fn execute(
        &self,
        user_id: &UserId,
    ) -> Result<LogoutAllDevicesResponse, LogoutAllDevicesError> {
        let sessions_terminated = self.sessions.revoke_all_sessions(user_id).await?;
        tracing::info!(sessions_terminated, "Revoked all sessions");

        Ok(LogoutAllDevicesResponse {
            success: true,
            sessions_terminated,
            terminated_at: Utc::now(),
        })
    }
}

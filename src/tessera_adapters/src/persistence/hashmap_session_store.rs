use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use tessera_core::{Session, SessionId, SessionStore, SessionStoreError, UserId};

#[derive(Default, Clone)]
pub struct HashMapSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

impl HashMapSessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn prune_expired(sessions: &mut HashMap<SessionId, Session>, now: DateTime<Utc>) {
    sessions.retain(|_, session| !session.is_expired(now));
}

#[async_trait::async_trait]
impl SessionStore for HashMapSessionStore {
    async fn create_session(&self, session: Session) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        prune_expired(&mut sessions, Utc::now());
        sessions.insert(session.id, session);
        Ok(())
    }

    async fn get_session(&self, id: &SessionId) -> Result<Session, SessionStoreError> {
        self.sessions
            .read()
            .await
            .get(id)
            .filter(|session| !session.is_expired(Utc::now()))
            .cloned()
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn touch_session(
        &self,
        id: &SessionId,
        now: DateTime<Utc>,
    ) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        match sessions.get_mut(id) {
            Some(session) if !session.is_expired(now) => {
                session.touch(now);
                Ok(())
            }
            _ => Err(SessionStoreError::SessionNotFound),
        }
    }

    async fn list_sessions(&self, user_id: &UserId) -> Result<Vec<Session>, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        prune_expired(&mut sessions, Utc::now());
        Ok(sessions
            .values()
            .filter(|session| &session.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn revoke_session(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        prune_expired(&mut sessions, Utc::now());
        sessions
            .remove(id)
            .ok_or(SessionStoreError::SessionNotFound)?;
        Ok(())
    }

    async fn revoke_all_sessions(&self, user_id: &UserId) -> Result<usize, SessionStoreError> {
        let mut sessions = self.sessions.write().await;
        prune_expired(&mut sessions, Utc::now());
        let before = sessions.len();
        sessions.retain(|_, session| &session.user_id != user_id);
        Ok(before - sessions.len())
    }
}

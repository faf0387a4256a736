//! In-memory port implementations shared by the use-case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;

use tessera_core::{
    AccessToken, Email, EmailClient, Password, PasswordHash, PasswordHashError, PasswordHasher,
    PendingVerification, PreferenceStore, PreferenceStoreError, Preferences, Role, Session,
    SessionId, SessionStore, SessionStoreError, TokenError, TokenPayload, TokenService, User,
    UserId, UserRepository, UserStoreError, VerificationCodeStore, VerificationCodeStoreError,
};

#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn add_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        if users.values().any(|existing| existing.email() == user.email()) {
            return Err(UserStoreError::UserAlreadyExists);
        }
        users.insert(user.id().clone(), user);
        Ok(())
    }

    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError> {
        self.users
            .read()
            .await
            .values()
            .find(|user| user.email() == email)
            .cloned()
            .ok_or(UserStoreError::UserNotFound)
    }

    async fn update_user(&self, user: User) -> Result<(), UserStoreError> {
        let mut users = self.users.write().await;
        match users.get_mut(user.id()) {
            Some(existing) => {
                *existing = user;
                Ok(())
            }
            None => Err(UserStoreError::UserNotFound),
        }
    }
}

#[derive(Default, Clone)]
pub struct MockPreferenceStore {
    records: Arc<RwLock<HashMap<UserId, Preferences>>>,
    fail_writes: bool,
}

impl MockPreferenceStore {
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PreferenceStore for MockPreferenceStore {
    async fn save_preferences(&self, preferences: Preferences) -> Result<(), PreferenceStoreError> {
        if self.fail_writes {
            return Err(PreferenceStoreError::UnexpectedError(
                "preference store unavailable".to_owned(),
            ));
        }
        self.records
            .write()
            .await
            .insert(preferences.user_id().clone(), preferences);
        Ok(())
    }

    async fn get_preferences(&self, user_id: &UserId) -> Result<Preferences, PreferenceStoreError> {
        self.records
            .read()
            .await
            .get(user_id)
            .cloned()
            .ok_or(PreferenceStoreError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct MockSessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, Session>>>,
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn create_session(&self, session: Session) -> Result<(), SessionStoreError> {
        self.sessions.write().await.insert(session.id, session);
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
        self.sessions
            .write()
            .await
            .get_mut(id)
            .filter(|session| !session.is_expired(now))
            .map(|session| session.touch(now))
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn list_sessions(&self, user_id: &UserId) -> Result<Vec<Session>, SessionStoreError> {
        let now = Utc::now();
        Ok(self
            .sessions
            .read()
            .await
            .values()
            .filter(|session| &session.user_id == user_id && !session.is_expired(now))
            .cloned()
            .collect())
    }

    async fn revoke_session(&self, id: &SessionId) -> Result<(), SessionStoreError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(SessionStoreError::SessionNotFound)
    }

    async fn revoke_all_sessions(&self, user_id: &UserId) -> Result<usize, SessionStoreError> {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, session| !session.is_expired(now));
        let before = sessions.len();
        sessions.retain(|_, session| &session.user_id != user_id);
        Ok(before - sessions.len())
    }
}

#[derive(Default, Clone)]
pub struct MockVerificationCodeStore {
    codes: Arc<RwLock<HashMap<Email, PendingVerification>>>,
}

#[async_trait]
impl VerificationCodeStore for MockVerificationCodeStore {
    async fn store_code(
        &self,
        email: Email,
        pending: PendingVerification,
    ) -> Result<(), VerificationCodeStoreError> {
        self.codes.write().await.insert(email, pending);
        Ok(())
    }

    async fn get_code(
        &self,
        email: &Email,
    ) -> Result<PendingVerification, VerificationCodeStoreError> {
        self.codes
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(VerificationCodeStoreError::NotFound)
    }

    async fn delete_code(&self, email: &Email) -> Result<(), VerificationCodeStoreError> {
        self.codes.write().await.remove(email);
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SentEmail {
    pub recipient: String,
    pub subject: String,
    pub content: String,
}

#[derive(Default, Clone)]
pub struct MockEmailClient {
    pub sent: Arc<RwLock<Vec<SentEmail>>>,
    pub fail: bool,
}

impl MockEmailClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl EmailClient for MockEmailClient {
    async fn send_email(&self, recipient: &Email, subject: &str, content: &str) -> Result<(), String> {
        if self.fail {
            return Err("mail server unavailable".to_owned());
        }
        self.sent.write().await.push(SentEmail {
            recipient: recipient.as_str().to_owned(),
            subject: subject.to_owned(),
            content: content.to_owned(),
        });
        Ok(())
    }
}

/// Hashes by prefixing, so tests can tell hashes and passwords apart.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

#[async_trait]
impl PasswordHasher for PlainPasswordHasher {
    async fn hash_password(&self, password: Password) -> Result<PasswordHash, PasswordHashError> {
        Ok(PasswordHash::new(Secret::new(format!(
            "plain${}",
            password.as_ref().expose_secret()
        ))))
    }

    async fn verify_password(
        &self,
        candidate: Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHashError> {
        let hashed = self.hash_password(candidate).await?;
        Ok(hashed.as_ref().expose_secret() == expected.as_ref().expose_secret())
    }
}

/// Encodes the payload as `user_id|email|role|session_id`.
#[derive(Default, Clone)]
pub struct FakeTokenService;

impl TokenService for FakeTokenService {
    fn generate_access_token(&self, payload: &TokenPayload) -> Result<AccessToken, TokenError> {
        Ok(AccessToken::new(format!(
            "{}|{}|{}|{}",
            payload.user_id,
            payload.email.as_str(),
            payload.role,
            payload.session_id
        )))
    }

    fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let invalid = || TokenError::InvalidToken(token.to_owned());
        let parts: Vec<&str> = token.split('|').collect();
        let [user_id, email, role, session_id] = parts.as_slice() else {
            return Err(invalid());
        };
        Ok(TokenPayload {
            user_id: UserId::try_from(user_id.to_string()).map_err(|_| invalid())?,
            email: Email::try_from(*email).map_err(|_| invalid())?,
            role: role.parse().map_err(|_| invalid())?,
            session_id: session_id.parse().map_err(|_| invalid())?,
        })
    }

    fn token_expires_in(&self) -> i64 {
        900
    }
}

pub async fn seed_user(users: &MockUserRepository, email: &str, password: &str) -> User {
    let hash = PlainPasswordHasher
        .hash_password(Password::candidate(Secret::new(password.to_owned())))
        .await
        .unwrap();
    let user = User::new(
        UserId::generate(),
        Email::try_from(email).unwrap(),
        hash,
        Role::User,
        Utc::now(),
    );
    users.add_user(user.clone()).await.unwrap();
    user
}

pub async fn seed_preferences(store: &MockPreferenceStore, user_id: &UserId) -> Preferences {
    let preferences = Preferences::with_defaults(user_id.clone(), Utc::now());
    store.save_preferences(preferences.clone()).await.unwrap();
    preferences
}

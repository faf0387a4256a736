use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    email::Email,
    preferences::Preferences,
    session::{Session, SessionId},
    user::User,
    user_id::UserId,
    verification_code::PendingVerification,
};

// UserRepository port trait and errors
#[derive(Debug, Error)]
pub enum UserStoreError {
    #[error("User already exists")]
    UserAlreadyExists,
    #[error("User not found")]
    UserNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for UserStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::UserAlreadyExists, Self::UserAlreadyExists)
                | (Self::UserNotFound, Self::UserNotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fails with `UserAlreadyExists` when either the id or the email is taken.
    async fn add_user(&self, user: User) -> Result<(), UserStoreError>;
    async fn get_user(&self, id: &UserId) -> Result<User, UserStoreError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserStoreError>;
    async fn update_user(&self, user: User) -> Result<(), UserStoreError>;
}

// PreferenceStore port trait and errors
#[derive(Debug, Error)]
pub enum PreferenceStoreError {
    #[error("Preferences not found")]
    NotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for PreferenceStoreError {
    fn eq(&self, other: &Self) -> bool {
        matches!(
            (self, other),
            (Self::NotFound, Self::NotFound)
                | (Self::UnexpectedError(_), Self::UnexpectedError(_))
        )
    }
}

#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Inserts or replaces the record for `preferences.user_id()`.
    async fn save_preferences(&self, preferences: Preferences)
    -> Result<(), PreferenceStoreError>;
    async fn get_preferences(&self, user_id: &UserId)
    -> Result<Preferences, PreferenceStoreError>;
}

// SessionStore port trait and errors
#[derive(Debug, Error)]
pub enum SessionStoreError {
    #[error("Session not found")]
    SessionNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Sessions past their `expires_at` are treated as absent by every read and
/// revocation, and implementations may drop them at any time.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create_session(&self, session: Session) -> Result<(), SessionStoreError>;
    async fn get_session(&self, id: &SessionId) -> Result<Session, SessionStoreError>;
    /// Sets `last_seen_at` of a live session to `now`.
    async fn touch_session(
        &self,
        id: &SessionId,
        now: DateTime<Utc>,
    ) -> Result<(), SessionStoreError>;
    async fn list_sessions(&self, user_id: &UserId) -> Result<Vec<Session>, SessionStoreError>;
    async fn revoke_session(&self, id: &SessionId) -> Result<(), SessionStoreError>;
    /// Returns the number of live sessions removed.
    async fn revoke_all_sessions(&self, user_id: &UserId) -> Result<usize, SessionStoreError>;
}

// VerificationCodeStore port trait and errors
#[derive(Debug, Error)]
pub enum VerificationCodeStoreError {
    #[error("No pending verification for this email")]
    NotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

#[async_trait]
pub trait VerificationCodeStore: Send + Sync {
    async fn store_code(
        &self,
        email: Email,
        pending: PendingVerification,
    ) -> Result<(), VerificationCodeStoreError>;
    async fn get_code(&self, email: &Email)
    -> Result<PendingVerification, VerificationCodeStoreError>;
    async fn delete_code(&self, email: &Email) -> Result<(), VerificationCodeStoreError>;
}

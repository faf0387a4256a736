use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{
    email::Email,
    password::{Password, PasswordHash},
    token::{AccessToken, TokenPayload},
};

/// Port trait for email sending service
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// Expired, tampered with, or not a token at all.
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

/// Port trait for issuing and checking bearer tokens
pub trait TokenService: Send + Sync {
    fn generate_access_token(&self, payload: &TokenPayload) -> Result<AccessToken, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError>;
    /// Lifetime of newly issued tokens, in seconds.
    fn token_expires_in(&self) -> i64;
}

#[derive(Debug, Error)]
#[error("Password hashing failed: {0}")]
pub struct PasswordHashError(pub String);

/// Port trait for one-way password hashing
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: Password) -> Result<PasswordHash, PasswordHashError>;
    async fn verify_password(
        &self,
        candidate: Password,
        expected: &PasswordHash,
    ) -> Result<bool, PasswordHashError>;
}

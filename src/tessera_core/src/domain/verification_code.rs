use chrono::{DateTime, Utc};
use rand::Rng;
use thiserror::Error;

const VERIFICATION_CODE_LENGTH: usize = 6;

/// Wrong guesses tolerated before a pending code is discarded.
pub const MAX_VERIFICATION_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Verification code must be exactly {} digits", VERIFICATION_CODE_LENGTH)]
pub struct VerificationCodeError;

/// Six-digit code mailed to a new account to prove ownership of the address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationCode(String);

impl VerificationCode {
    pub fn generate() -> Self {
        let code = rand::rng().random_range(0..1_000_000u32);
        Self(format!("{code:06}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for VerificationCode {
    type Error = VerificationCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() != VERIFICATION_CODE_LENGTH || !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(VerificationCodeError);
        }
        Ok(Self(value.to_owned()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingVerification {
    pub code: VerificationCode,
    pub expires_at: DateTime<Utc>,
    pub failed_attempts: u32,
}

impl PendingVerification {
    pub fn new(code: VerificationCode, expires_at: DateTime<Utc>) -> Self {
        Self {
            code,
            expires_at,
            failed_attempts: 0,
        }
    }

    /// Counts a wrong guess. Returns `true` once no guesses remain.
    pub fn record_failed_attempt(&mut self) -> bool {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
        self.failed_attempts >= MAX_VERIFICATION_ATTEMPTS
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

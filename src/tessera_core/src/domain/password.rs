use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

const PASSWORD_MIN_LENGTH: usize = 8;
const PASSWORD_MAX_LENGTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordError {
    #[error("Password must be at least {} characters", PASSWORD_MIN_LENGTH)]
    TooShort,
    #[error("Password must be at most {} characters", PASSWORD_MAX_LENGTH)]
    TooLong,
    #[error("Password must contain at least one letter")]
    MissingLetter,
    #[error("Password must contain at least one digit")]
    MissingDigit,
}

/// A plaintext password that satisfies the strength policy.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    /// Wraps a login candidate without applying the strength policy.
    ///
    /// Existing accounts may predate the current policy, so login only
    /// needs the string to be present.
    pub fn candidate(value: Secret<String>) -> Self {
        Self(value)
    }

    pub fn matches(&self, other: &str) -> bool {
        self.0.expose_secret() == other
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        let password = value.expose_secret();
        let length = password.chars().count();

        if length < PASSWORD_MIN_LENGTH {
            return Err(PasswordError::TooShort);
        }
        if length > PASSWORD_MAX_LENGTH {
            return Err(PasswordError::TooLong);
        }
        if !password.chars().any(char::is_alphabetic) {
            return Err(PasswordError::MissingLetter);
        }
        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(PasswordError::MissingDigit);
        }

        Ok(Self(value))
    }
}

impl TryFrom<&str> for Password {
    type Error = PasswordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::try_from(Secret::new(value.to_owned()))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// An encoded password hash (PHC string format).
#[derive(Debug, Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(encoded: Secret<String>) -> Self {
        Self(encoded)
    }
}

impl AsRef<Secret<String>> for PasswordHash {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

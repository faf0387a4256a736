use std::fmt;

use rand::{Rng, distr::Alphanumeric};
use serde::Serialize;
use thiserror::Error;

pub const USER_ID_LENGTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserIdError {
    #[error("User id must be exactly {} characters", USER_ID_LENGTH)]
    InvalidLength,
    #[error("User id may only contain ASCII letters and digits")]
    InvalidCharacter,
}

/// Public identifier of an account.
///
/// Twelve symbols drawn uniformly from `[A-Za-z0-9]` give roughly 71 bits of
/// entropy. Uniqueness is enforced by the user repository, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn generate() -> Self {
        let id = rand::rng()
            .sample_iter(Alphanumeric)
            .take(USER_ID_LENGTH)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.len() != USER_ID_LENGTH {
            return Err(UserIdError::InvalidLength);
        }
        if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(UserIdError::InvalidCharacter);
        }
        Ok(Self(value))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

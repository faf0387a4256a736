pub mod currency;
pub mod email;
pub mod export_format;
pub mod mfa;
pub mod password;
pub mod preferences;
pub mod role;
pub mod session;
pub mod theme;
pub mod timezone;
pub mod token;
pub mod user;
pub mod user_id;
pub mod verification_code;

use thiserror::Error;

/// Returned when a string does not name any variant of a closed enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("must be one of: {expected}")]
pub struct UnknownVariant {
    pub expected: &'static str,
}

//! Request validation.
//!
//! Each inbound request type has an explicit schema that reads the raw JSON
//! payload field by field. Every violation is collected, so a client sees all
//! failing fields at once instead of fixing them one round trip at a time.

mod errors;
mod validator;

pub use errors::{ValidationError, ValidationErrors};
pub use validator::RequestValidator;

/// A request type that can be built from a raw JSON payload.
pub trait ValidateRequest: Sized {
    fn validate(payload: &serde_json::Value) -> Result<Self, ValidationErrors>;
}

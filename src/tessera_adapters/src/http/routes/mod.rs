pub mod account;
pub mod error;
pub mod health_check;
pub mod login;
pub mod logout;
pub mod preferences;
pub mod register;
pub mod security;
pub mod sessions;
pub mod verify_email;

use axum::{Json, extract::rejection::JsonRejection};
use serde_json::Value;
use tessera_core::ValidateRequest;

use self::error::ApiError;

pub use account::export_data;
pub use health_check::health_check;
pub use login::login;
pub use logout::logout;
pub use preferences::{
    get_preferences, set_currency, set_high_contrast, set_theme, set_timezone,
};
pub use register::register;
pub use security::{generate_backup_codes, update_mfa};
pub use sessions::{active_sessions, logout_all_devices};
pub use verify_email::{resend_verification, verify_email};

/// Runs the request schema over a raw JSON body.
pub(crate) fn validated<T: ValidateRequest>(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<T, ApiError> {
    let Json(payload) = payload?;
    Ok(T::validate(&payload)?)
}

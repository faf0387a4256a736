use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tessera_application::{
    ExportDataError, GenerateBackupCodesError, LoginError, LogoutAllDevicesError, LogoutError,
    PreferencesError, RegisterUserError, ResendVerificationError, VerifyEmailError,
    ViewActiveSessionsError,
};
use tessera_core::{
    PasswordHashError, PreferenceStoreError, SessionStoreError, TokenError, UserStoreError,
    ValidationError, ValidationErrors, VerificationCodeStoreError,
};
use thiserror::Error;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationError>>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("User not found")]
    UserNotFound,

    #[error("Preferences not found")]
    PreferencesNotFound,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Missing token")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Session has been revoked")]
    SessionRevoked,

    #[error("Invalid verification code")]
    InvalidVerificationCode,

    #[error("Verification code has expired")]
    VerificationCodeExpired,

    #[error("Too many invalid verification attempts, request a new code")]
    TooManyVerificationAttempts,

    #[error("Email address is already verified")]
    EmailAlreadyVerified,

    #[error("MFA must be enabled before backup codes can be generated")]
    MfaNotEnabled,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = match self {
            ApiError::Validation(_)
            | ApiError::InvalidInput(_)
            | ApiError::InvalidVerificationCode
            | ApiError::VerificationCodeExpired => StatusCode::BAD_REQUEST,

            ApiError::UserAlreadyExists
            | ApiError::EmailAlreadyVerified
            | ApiError::MfaNotEnabled => StatusCode::CONFLICT,

            ApiError::InvalidCredentials
            | ApiError::MissingToken
            | ApiError::InvalidToken(_)
            | ApiError::SessionRevoked => StatusCode::UNAUTHORIZED,

            ApiError::UserNotFound | ApiError::PreferencesNotFound => StatusCode::NOT_FOUND,

            ApiError::TooManyVerificationAttempts => StatusCode::TOO_MANY_REQUESTS,

            ApiError::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            ApiError::Validation(errors) => ErrorResponse {
                error: "Validation failed".to_owned(),
                details: Some(errors.into_iter().collect()),
            },
            ApiError::UnexpectedError(e) => {
                tracing::error!(error = %e, "Request failed");
                ErrorResponse {
                    error: "Unexpected error".to_owned(),
                    details: None,
                }
            }
            ApiError::InvalidToken(e) => {
                tracing::debug!(error = %e, "Rejected bearer token");
                ErrorResponse {
                    error: "Invalid token".to_owned(),
                    details: None,
                }
            }
            other => ErrorResponse {
                error: other.to_string(),
                details: None,
            },
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::UserAlreadyExists,
            UserStoreError::UserNotFound => ApiError::UserNotFound,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<PreferenceStoreError> for ApiError {
    fn from(error: PreferenceStoreError) -> Self {
        match error {
            PreferenceStoreError::NotFound => ApiError::PreferencesNotFound,
            PreferenceStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<SessionStoreError> for ApiError {
    fn from(error: SessionStoreError) -> Self {
        match error {
            SessionStoreError::SessionNotFound => ApiError::SessionRevoked,
            SessionStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<VerificationCodeStoreError> for ApiError {
    fn from(error: VerificationCodeStoreError) -> Self {
        match error {
            VerificationCodeStoreError::NotFound => ApiError::InvalidVerificationCode,
            VerificationCodeStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<TokenError> for ApiError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::InvalidToken(e) => ApiError::InvalidToken(e),
            TokenError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<PasswordHashError> for ApiError {
    fn from(error: PasswordHashError) -> Self {
        ApiError::UnexpectedError(error.to_string())
    }
}

impl From<RegisterUserError> for ApiError {
    fn from(error: RegisterUserError) -> Self {
        match error {
            RegisterUserError::UserStoreError(e) => e.into(),
            RegisterUserError::PreferenceStoreError(e) => e.into(),
            RegisterUserError::VerificationCodeStoreError(e) => e.into(),
            RegisterUserError::PasswordHashError(e) => e.into(),
        }
    }
}

impl From<LoginError> for ApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => ApiError::InvalidCredentials,
            LoginError::UserStoreError(e) => e.into(),
            LoginError::SessionStoreError(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::TokenError(e) => ApiError::UnexpectedError(e.to_string()),
            LoginError::PasswordHashError(e) => e.into(),
        }
    }
}

impl From<LogoutError> for ApiError {
    fn from(error: LogoutError) -> Self {
        match error {
            LogoutError::SessionStoreError(e) => e.into(),
        }
    }
}

impl From<VerifyEmailError> for ApiError {
    fn from(error: VerifyEmailError) -> Self {
        match error {
            VerifyEmailError::InvalidCode => ApiError::InvalidVerificationCode,
            VerifyEmailError::CodeExpired => ApiError::VerificationCodeExpired,
            VerifyEmailError::TooManyAttempts => ApiError::TooManyVerificationAttempts,
            VerifyEmailError::UserStoreError(e) => e.into(),
            VerifyEmailError::VerificationCodeStoreError(e) => e.into(),
        }
    }
}

impl From<ResendVerificationError> for ApiError {
    fn from(error: ResendVerificationError) -> Self {
        match error {
            ResendVerificationError::AlreadyVerified => ApiError::EmailAlreadyVerified,
            ResendVerificationError::UserStoreError(e) => e.into(),
            ResendVerificationError::VerificationCodeStoreError(e) => e.into(),
        }
    }
}

impl From<PreferencesError> for ApiError {
    fn from(error: PreferencesError) -> Self {
        match error {
            PreferencesError::PreferenceStoreError(e) => e.into(),
        }
    }
}

impl From<GenerateBackupCodesError> for ApiError {
    fn from(error: GenerateBackupCodesError) -> Self {
        match error {
            GenerateBackupCodesError::MfaNotEnabled => ApiError::MfaNotEnabled,
            GenerateBackupCodesError::PreferenceStoreError(e) => e.into(),
        }
    }
}

impl From<ExportDataError> for ApiError {
    fn from(error: ExportDataError) -> Self {
        match error {
            ExportDataError::UserStoreError(e) => e.into(),
            ExportDataError::PreferenceStoreError(e) => e.into(),
            ExportDataError::SerializationError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LogoutAllDevicesError> for ApiError {
    fn from(error: LogoutAllDevicesError) -> Self {
        match error {
            LogoutAllDevicesError::SessionStoreError(e) => e.into(),
        }
    }
}

impl From<ViewActiveSessionsError> for ApiError {
    fn from(error: ViewActiveSessionsError) -> Self {
        match error {
            ViewActiveSessionsError::SessionStoreError(e) => e.into(),
        }
    }
}

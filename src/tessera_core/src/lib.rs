pub mod domain;
pub mod ports;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    UnknownVariant,
    currency::{Currency, CurrencyError},
    email::{Email, EmailError},
    export_format::ExportFormat,
    mfa::{BackupCodeSet, MfaMethod, MfaSettings},
    password::{Password, PasswordError, PasswordHash},
    preferences::{HighContrastSettings, Preferences, ThemeSettings},
    role::Role,
    session::{Session, SessionId},
    theme::{ColorScheme, HexColor, Theme, ThemeError},
    timezone::{Timezone, TimezoneError},
    token::{AccessToken, TokenPayload},
    user::User,
    user_id::{UserId, UserIdError},
    verification_code::{
        MAX_VERIFICATION_ATTEMPTS, PendingVerification, VerificationCode, VerificationCodeError,
    },
};

pub use ports::{
    repositories::{
        PreferenceStore, PreferenceStoreError, SessionStore, SessionStoreError, UserRepository,
        UserStoreError, VerificationCodeStore, VerificationCodeStoreError,
    },
    services::{EmailClient, PasswordHashError, PasswordHasher, TokenError, TokenService},
};

pub use validation::{RequestValidator, ValidateRequest, ValidationError, ValidationErrors};

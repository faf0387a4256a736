//! # Tessera - Account Identity and Preferences Service
//!
//! Facade crate re-exporting the public APIs of the service components.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `User`, `Preferences`, `Session`, etc.
//! - **Ports**: `UserRepository`, `PreferenceStore`, `SessionStore`, `VerificationCodeStore`,
//!   `PasswordHasher`, `TokenService`, `EmailClient`
//! - **Use cases**: `RegisterUserUseCase`, `LoginUseCase`, `SetThemeUseCase`, etc.
//! - **Adapters**: in-memory stores, `Argon2PasswordHasher`, `JwtTokenService`,
//!   `PostmarkEmailClient`
//! - **Service**: `AccountService`, the HTTP entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use tessera_core::*;
}

pub use tessera_core::{
    Currency, Email, MfaMethod, Password, Preferences, Role, Session, SessionId, Theme, Timezone,
    User, UserId,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use tessera_core::{
        EmailClient, PasswordHashError, PasswordHasher, PreferenceStore, PreferenceStoreError,
        SessionStore, SessionStoreError, TokenError, TokenService, UserRepository, UserStoreError,
        VerificationCodeStore, VerificationCodeStoreError,
    };
}

pub use ports::{
    EmailClient, PasswordHasher, PreferenceStore, SessionStore, TokenService, UserRepository,
    VerificationCodeStore,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases and request/response types
pub mod use_cases {
    pub use tessera_application::*;
}

pub use tessera_application::{
    ExportDataUseCase, GenerateBackupCodesUseCase, GetPreferencesUseCase, LoginUseCase,
    LogoutAllDevicesUseCase, LogoutUseCase, RegisterUserUseCase, ResendVerificationUseCase,
    SetCurrencyUseCase, SetHighContrastUseCase, SetThemeUseCase, SetTimezoneUseCase,
    UpdateMfaUseCase, VerifyEmailUseCase, ViewActiveSessionsUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers, shared state and the bearer extractor
    pub mod http {
        pub use tessera_adapters::http::*;
    }

    /// In-memory store implementations
    pub mod persistence {
        pub use tessera_adapters::persistence::*;
    }

    /// Email client implementations
    pub mod email {
        pub use tessera_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use tessera_adapters::config::*;
    }
}

pub use tessera_adapters::{
    AppState, Argon2PasswordHasher, HashMapPreferenceStore, HashMapSessionStore,
    HashMapUserRepository, HashMapVerificationCodeStore, JwtTokenService, LogEmailClient,
    PostmarkEmailClient,
};

// ============================================================================
// Account Service (Main Entry Point)
// ============================================================================

pub use tessera_service::AccountService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;

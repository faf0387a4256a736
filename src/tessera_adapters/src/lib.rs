pub mod config;
pub mod email;
pub mod http;
pub mod password;
pub mod persistence;
pub mod token;

pub use email::{LogEmailClient, PostmarkEmailClient};
pub use http::{AppState, AuthenticatedUser};
pub use password::Argon2PasswordHasher;
pub use persistence::{
    HashMapPreferenceStore, HashMapSessionStore, HashMapUserRepository,
    HashMapVerificationCodeStore,
};
pub use token::JwtTokenService;

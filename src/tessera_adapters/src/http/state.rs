use std::sync::Arc;

use tessera_core::{
    EmailClient, PasswordHasher, PreferenceStore, SessionStore, TokenService, UserRepository,
    VerificationCodeStore,
};

/// Ports shared by every route, resolved once at startup.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub preferences: Arc<dyn PreferenceStore>,
    pub sessions: Arc<dyn SessionStore>,
    pub verification_codes: Arc<dyn VerificationCodeStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub tokens: Arc<dyn TokenService>,
    pub email_client: Arc<dyn EmailClient>,
    pub verification_code_ttl: chrono::Duration,
}

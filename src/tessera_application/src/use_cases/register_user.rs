use chrono::{Duration, Utc};
use tessera_core::{
    EmailClient, PasswordHashError, PasswordHasher, PreferenceStore, PreferenceStoreError,
    Preferences, Role, User, UserId, UserRepository, UserStoreError, VerificationCodeStore,
    VerificationCodeStoreError,
};

use super::verify_email::send_verification_code;
use crate::dto::{RegisterUserRequest, RegisterUserResponse};

#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Preference store error: {0}")]
    PreferenceStoreError(#[from] PreferenceStoreError),
    #[error("Verification code store error: {0}")]
    VerificationCodeStoreError(#[from] VerificationCodeStoreError),
    #[error(transparent)]
    PasswordHashError(#[from] PasswordHashError),
}

/// Creates an account with default preferences and mails a verification code.
pub struct RegisterUserUseCase<'a, U, P, H, V, E>
where
    U: UserRepository + ?Sized,
    P: PreferenceStore + ?Sized,
    H: PasswordHasher + ?Sized,
    V: VerificationCodeStore + ?Sized,
    E: EmailClient + ?Sized,
{
    users: &'a U,
    preferences: &'a P,
    password_hasher: &'a H,
    codes: &'a V,
    email_client: &'a E,
    code_ttl: Duration,
}

impl<'a, U, P, H, V, E> RegisterUserUseCase<'a, U, P, H, V, E>
where
    U: UserRepository + ?Sized,
    P: PreferenceStore + ?Sized,
    H: PasswordHasher + ?Sized,
    V: VerificationCodeStore + ?Sized,
    E: EmailClient + ?Sized,
{
    pub fn new(
        users: &'a U,
        preferences: &'a P,
        password_hasher: &'a H,
        codes: &'a V,
        email_client: &'a E,
        code_ttl: Duration,
    ) -> Self {
        Self {
            users,
            preferences,
            password_hasher,
            codes,
            email_client,
            code_ttl,
        }
    }

    #[tracing::instrument(name = "RegisterUserUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: RegisterUserRequest,
    ) -> Result<RegisterUserResponse, RegisterUserError> {
        match self.users.find_by_email(&request.email).await {
            Ok(_) => return Err(UserStoreError::UserAlreadyExists.into()),
            Err(UserStoreError::UserNotFound) => {}
            Err(e) => return Err(e.into()),
        }

        let password_hash = self.password_hasher.hash_password(request.password).await?;
        let now = Utc::now();
        let user = User::new(
            UserId::generate(),
            request.email,
            password_hash,
            Role::User,
            now,
        );

        // Preferences go first so a failed write never leaves an account without them.
        self.preferences
            .save_preferences(Preferences::with_defaults(user.id().clone(), now))
            .await?;
        self.users.add_user(user.clone()).await?;
        send_verification_code(self.codes, self.email_client, user.email(), self.code_ttl, now)
            .await?;

        tracing::info!(user_id = %user.id(), "Registered user");
        Ok(RegisterUserResponse::from(&user))
    }
}

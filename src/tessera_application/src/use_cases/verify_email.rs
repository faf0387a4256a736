use chrono::{DateTime, Duration, Utc};
use tessera_core::{
    Email, EmailClient, MAX_VERIFICATION_ATTEMPTS, PendingVerification, UserRepository,
    UserStoreError, VerificationCode, VerificationCodeStore, VerificationCodeStoreError,
};

use crate::dto::{ResendVerificationRequest, VerifyEmailRequest, VerifyEmailResponse};

const VERIFICATION_EMAIL_SUBJECT: &str = "Verify your email address";

/// Stores a new code for `email` and mails it.
///
/// Delivery failures are logged, not returned: the code stays valid and can
/// be re-sent.
pub(crate) async fn send_verification_code<V, E>(
    codes: &V,
    email_client: &E,
    email: &Email,
    code_ttl: Duration,
    now: DateTime<Utc>,
) -> Result<(), VerificationCodeStoreError>
where
    V: VerificationCodeStore + ?Sized,
    E: EmailClient + ?Sized,
{
    let pending = PendingVerification::new(VerificationCode::generate(), now + code_ttl);
    let content = format!(
        "Your verification code is {}. It expires in {} minutes.",
        pending.code.as_str(),
        code_ttl.num_minutes()
    );
    codes.store_code(email.clone(), pending).await?;

    if let Err(e) = email_client
        .send_email(email, VERIFICATION_EMAIL_SUBJECT, &content)
        .await
    {
        tracing::warn!(error = %e, "Failed to send verification email");
    }
    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyEmailError {
    #[error("Invalid verification code")]
    InvalidCode,
    #[error("Verification code has expired")]
    CodeExpired,
    #[error("Too many invalid verification attempts")]
    TooManyAttempts,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Verification code store error: {0}")]
    VerificationCodeStoreError(#[from] VerificationCodeStoreError),
}

/// Confirms ownership of an address with the code mailed at registration.
///
/// A pending code survives up to `MAX_VERIFICATION_ATTEMPTS` wrong guesses;
/// the last one discards it and a new code must be requested.
pub struct VerifyEmailUseCase<'a, U, V>
where
    U: UserRepository + ?Sized,
    V: VerificationCodeStore + ?Sized,
{
    users: &'a U,
    codes: &'a V,
}

impl<'a, U, V> VerifyEmailUseCase<'a, U, V>
where
    U: UserRepository + ?Sized,
    V: VerificationCodeStore + ?Sized,
{
    pub fn new(users: &'a U, codes: &'a V) -> Self {
        Self { users, codes }
    }

    #[tracing::instrument(name = "VerifyEmailUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: VerifyEmailRequest,
    ) -> Result<VerifyEmailResponse, VerifyEmailError> {
        let mut pending = match self.codes.get_code(&request.email).await {
            Ok(pending) => pending,
            Err(VerificationCodeStoreError::NotFound) => return Err(VerifyEmailError::InvalidCode),
            Err(e) => return Err(e.into()),
        };

        let now = Utc::now();
        if pending.is_expired(now) {
            self.codes.delete_code(&request.email).await?;
            return Err(VerifyEmailError::CodeExpired);
        }
        if pending.code != request.code {
            if pending.record_failed_attempt() {
                self.codes.delete_code(&request.email).await?;
                tracing::warn!(
                    attempts = MAX_VERIFICATION_ATTEMPTS,
                    "Discarded verification code after repeated failures"
                );
                return Err(VerifyEmailError::TooManyAttempts);
            }
            self.codes.store_code(request.email, pending).await?;
            return Err(VerifyEmailError::InvalidCode);
        }

        let mut user = self.users.find_by_email(&request.email).await?;
        user.mark_email_verified(now);
        let verified_at = user.email_verified_at().unwrap_or(now);
        self.users.update_user(user).await?;
        self.codes.delete_code(&request.email).await?;

        Ok(VerifyEmailResponse {
            verified: true,
            verified_at,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ResendVerificationError {
    #[error("Email address is already verified")]
    AlreadyVerified,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Verification code store error: {0}")]
    VerificationCodeStoreError(#[from] VerificationCodeStoreError),
}

/// Replaces any pending code with a new one and mails it.
///
/// Unknown addresses succeed silently so the endpoint does not reveal which
/// accounts exist.
pub struct ResendVerificationUseCase<'a, U, V, E>
where
    U: UserRepository + ?Sized,
    V: VerificationCodeStore + ?Sized,
    E: EmailClient + ?Sized,
{
    users: &'a U,
    codes: &'a V,
    email_client: &'a E,
    code_ttl: Duration,
}

impl<'a, U, V, E> ResendVerificationUseCase<'a, U, V, E>
where
    U: UserRepository + ?Sized,
    V: VerificationCodeStore + ?Sized,
    E: EmailClient + ?Sized,
{
    pub fn new(users: &'a U, codes: &'a V, email_client: &'a E, code_ttl: Duration) -> Self {
        Self {
            users,
            codes,
            email_client,
            code_ttl,
        }
    }

    #[tracing::instrument(name = "ResendVerificationUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        request: ResendVerificationRequest,
    ) -> Result<(), ResendVerificationError> {
        let user = match self.users.find_by_email(&request.email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => {
                tracing::info!("Verification resend requested for unknown address");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if user.email_verified() {
            return Err(ResendVerificationError::AlreadyVerified);
        }

        send_verification_code(
            self.codes,
            self.email_client,
            user.email(),
            self.code_ttl,
            Utc::now(),
        )
        .await?;
        Ok(())
    }
}

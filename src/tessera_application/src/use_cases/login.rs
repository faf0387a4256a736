use chrono::{Duration, Utc};
use tessera_core::{
    PasswordHashError, PasswordHasher, Session, SessionStore, SessionStoreError, TokenError,
    TokenService, UserRepository, UserStoreError,
};

use crate::dto::{LoginRequest, LoginResponse, UserSummary};
use crate::token_issuer::issue_access_token;

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Unknown email or wrong password; the two are not told apart.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Session store error: {0}")]
    SessionStoreError(#[from] SessionStoreError),
    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
    #[error(transparent)]
    PasswordHashError(#[from] PasswordHashError),
}

/// Checks credentials, opens a session and issues a token bound to it.
pub struct LoginUseCase<'a, U, H, S, T>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    S: SessionStore + ?Sized,
    T: TokenService + ?Sized,
{
    users: &'a U,
    password_hasher: &'a H,
    sessions: &'a S,
    tokens: &'a T,
}

impl<'a, U, H, S, T> LoginUseCase<'a, U, H, S, T>
where
    U: UserRepository + ?Sized,
    H: PasswordHasher + ?Sized,
    S: SessionStore + ?Sized,
    T: TokenService + ?Sized,
{
    pub fn new(users: &'a U, password_hasher: &'a H, sessions: &'a S, tokens: &'a T) -> Self {
        Self {
            users,
            password_hasher,
            sessions,
            tokens,
        }
    }

    #[tracing::instrument(name = "LoginUseCase::execute", skip(self, request))]
    pub async fn execute(
        &self,
        request: LoginRequest,
        user_agent: Option<String>,
    ) -> Result<LoginResponse, LoginError> {
        let user = match self.users.find_by_email(&request.email).await {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::InvalidCredentials),
            Err(e) => return Err(e.into()),
        };

        let matches = self
            .password_hasher
            .verify_password(request.password, user.password_hash())
            .await?;
        if !matches {
            return Err(LoginError::InvalidCredentials);
        }

        let lifetime = Duration::seconds(self.tokens.token_expires_in());
        let session = Session::start(user.id().clone(), user_agent, Utc::now(), lifetime);
        let session_id = session.id;
        self.sessions.create_session(session).await?;

        let token = issue_access_token(self.tokens, &user, session_id)?;
        tracing::info!(user_id = %user.id(), session_id = %session_id, "User logged in");

        Ok(LoginResponse {
            access_token: token.into_string(),
            token_type: "Bearer",
            expires_in: self.tokens.token_expires_in(),
            user: UserSummary::from(&user),
        })
    }
}

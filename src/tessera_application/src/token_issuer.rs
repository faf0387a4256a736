use tessera_core::{AccessToken, SessionId, TokenError, TokenPayload, TokenService, User};

/// Issue a bearer token carrying the identity claims of `user`.
///
/// The token is bound to `session_id`; revoking that session invalidates it.
pub fn issue_access_token<T>(
    tokens: &T,
    user: &User,
    session_id: SessionId,
) -> Result<AccessToken, TokenError>
where
    T: TokenService + ?Sized,
{
    let payload = TokenPayload {
        user_id: user.id().clone(),
        email: user.email().clone(),
        role: user.role(),
        session_id,
    };

    tokens.generate_access_token(&payload)
}

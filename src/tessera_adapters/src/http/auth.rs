use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use chrono::Utc;
use tessera_core::{Email, Role, SessionId, SessionStoreError, UserId};

use super::{routes::error::ApiError, state::AppState};

/// The caller behind a bearer token whose session is still open.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: Email,
    pub role: Role,
    pub session_id: SessionId,
}

impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingToken)?;

        let payload = state.tokens.verify_token(bearer.token())?;

        let session = match state.sessions.get_session(&payload.session_id).await {
            Ok(session) => session,
            Err(SessionStoreError::SessionNotFound) => return Err(ApiError::SessionRevoked),
            Err(e) => return Err(e.into()),
        };
        if session.user_id != payload.user_id {
            return Err(ApiError::SessionRevoked);
        }
        state.sessions.touch_session(&session.id, Utc::now()).await?;

        Ok(Self {
            user_id: payload.user_id,
            email: payload.email,
            role: payload.role,
            session_id: payload.session_id,
        })
    }
}

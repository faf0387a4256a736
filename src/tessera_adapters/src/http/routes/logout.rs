use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use tessera_application::LogoutUseCase;

use super::error::ApiError;
use crate::http::{AppState, AuthenticatedUser};

#[tracing::instrument(name = "Logout", skip_all)]
pub async fn logout(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    LogoutUseCase::new(&*state.sessions)
        .execute(&user.session_id)
        .await?;

    Ok(Json(json!({ "success": true })))
}

use axum::{Json, extract::State, response::IntoResponse};
use tessera_application::{LogoutAllDevicesUseCase, ViewActiveSessionsUseCase};

use super::error::ApiError;
use crate::http::{AppState, AuthenticatedUser};

#[tracing::instrument(name = "Active sessions", skip_all)]
pub async fn active_sessions(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let response = ViewActiveSessionsUseCase::new(&*state.sessions)
        .execute(&user.user_id, &user.session_id)
        .await?;
    Ok(Json(response))
}

#[tracing::instrument(name = "Logout all devices", skip_all)]
pub async fn logout_all_devices(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let response = LogoutAllDevicesUseCase::new(&*state.sessions)
        .execute(&user.user_id)
        .await?;
    Ok(Json(response))
}

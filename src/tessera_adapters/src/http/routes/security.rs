use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;
use tessera_application::{GenerateBackupCodesUseCase, UpdateMfaUseCase, dto::UpdateMfaRequest};

use super::{error::ApiError, validated};
use crate::http::{AppState, AuthenticatedUser};

#[tracing::instrument(name = "Update MFA", skip_all)]
pub async fn update_mfa(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: UpdateMfaRequest = validated(payload)?;
    let response = UpdateMfaUseCase::new(&*state.preferences)
        .execute(&user.user_id, request)
        .await?;
    Ok(Json(response))
}

#[tracing::instrument(name = "Generate backup codes", skip_all)]
pub async fn generate_backup_codes(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let response = GenerateBackupCodesUseCase::new(&*state.preferences)
        .execute(&user.user_id)
        .await?;
    Ok(Json(response))
}

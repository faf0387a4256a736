use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;
use tessera_application::{ExportDataUseCase, dto::ExportDataRequest};

use super::{error::ApiError, validated};
use crate::http::{AppState, AuthenticatedUser};

#[tracing::instrument(name = "Export data", skip_all)]
pub async fn export_data(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: ExportDataRequest = validated(payload)?;
    let response = ExportDataUseCase::new(&*state.users, &*state.preferences)
        .execute(&user.user_id, request)
        .await?;
    Ok(Json(response))
}

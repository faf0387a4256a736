use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use tessera_application::{RegisterUserUseCase, dto::RegisterUserRequest};

use super::{error::ApiError, validated};
use crate::http::AppState;

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: RegisterUserRequest = validated(payload)?;

    let use_case = RegisterUserUseCase::new(
        &*state.users,
        &*state.preferences,
        &*state.password_hasher,
        &*state.verification_codes,
        &*state.email_client,
        state.verification_code_ttl,
    );
    let response = use_case.execute(request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

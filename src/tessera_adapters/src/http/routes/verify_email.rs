use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::{Value, json};
use tessera_application::{
    ResendVerificationUseCase, VerifyEmailUseCase,
    dto::{ResendVerificationRequest, VerifyEmailRequest},
};

use super::{error::ApiError, validated};
use crate::http::AppState;

#[tracing::instrument(name = "Verify email", skip_all)]
pub async fn verify_email(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: VerifyEmailRequest = validated(payload)?;

    let response = VerifyEmailUseCase::new(&*state.users, &*state.verification_codes)
        .execute(request)
        .await?;

    Ok(Json(response))
}

#[tracing::instrument(name = "Resend verification", skip_all)]
pub async fn resend_verification(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: ResendVerificationRequest = validated(payload)?;

    ResendVerificationUseCase::new(
        &*state.users,
        &*state.verification_codes,
        &*state.email_client,
        state.verification_code_ttl,
    )
    .execute(request)
    .await?;

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "message": "Verification code sent" })),
    ))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::Value;
use tessera_application::{
    GetPreferencesUseCase, SetCurrencyUseCase, SetHighContrastUseCase, SetThemeUseCase,
    SetTimezoneUseCase,
    dto::{SetCurrencyRequest, SetHighContrastRequest, SetThemeRequest, SetTimezoneRequest},
};

use super::{error::ApiError, validated};
use crate::http::{AppState, AuthenticatedUser};

#[tracing::instrument(name = "Get preferences", skip_all)]
pub async fn get_preferences(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<impl IntoResponse, ApiError> {
    let response = GetPreferencesUseCase::new(&*state.preferences)
        .execute(&user.user_id)
        .await?;
    Ok(Json(response))
}

#[tracing::instrument(name = "Set theme", skip_all)]
pub async fn set_theme(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: SetThemeRequest = validated(payload)?;
    let response = SetThemeUseCase::new(&*state.preferences)
        .execute(&user.user_id, request)
        .await?;
    Ok(Json(response))
}

#[tracing::instrument(name = "Set high contrast", skip_all)]
pub async fn set_high_contrast(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: SetHighContrastRequest = validated(payload)?;
    let response = SetHighContrastUseCase::new(&*state.preferences)
        .execute(&user.user_id, request)
        .await?;
    Ok(Json(response))
}

#[tracing::instrument(name = "Set currency", skip_all)]
pub async fn set_currency(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: SetCurrencyRequest = validated(payload)?;
    let response = SetCurrencyUseCase::new(&*state.preferences)
        .execute(&user.user_id, request)
        .await?;
    Ok(Json(response))
}

#[tracing::instrument(name = "Set timezone", skip_all)]
pub async fn set_timezone(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: SetTimezoneRequest = validated(payload)?;
    let response = SetTimezoneUseCase::new(&*state.preferences)
        .execute(&user.user_id, request)
        .await?;
    Ok(Json(response))
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};
use axum_extra::{TypedHeader, headers::UserAgent};
use serde_json::Value;
use tessera_application::{LoginUseCase, dto::LoginRequest};

use super::{error::ApiError, validated};
use crate::http::AppState;

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    user_agent: Option<TypedHeader<UserAgent>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request: LoginRequest = validated(payload)?;
    let user_agent = user_agent.map(|TypedHeader(agent)| agent.as_str().to_owned());

    let use_case = LoginUseCase::new(
        &*state.users,
        &*state.password_hasher,
        &*state.sessions,
        &*state.tokens,
    );
    let response = use_case.execute(request, user_agent).await?;

    Ok(Json(response))
}

//! Authentication API handlers

use axum::{extract::State, Json};

use crate::{
    error::ApiResult,
    extract::ApiJson,
    models::{LoginRequest, TokenResponse},
    state::AppState,
};

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authentication successful", body = TokenResponse),
        (status = 400, description = "Missing username or password"),
        (status = 401, description = "Authentication failed")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.services.auth.login(request.into_command()?).await?;
    Ok(Json(token.into()))
}

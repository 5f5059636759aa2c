//! User account handlers

use axum::{extract::State, http::StatusCode, Json};
use softdesk_application::UpdateMode;
use softdesk_domain::UserId;

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiPath, Authenticated, CurrentActor},
    models::{UserRequest, UserResponse},
    state::AppState,
};

/// List all accounts (admin only)
#[utoipa::path(
    get,
    path = "/api/v1/users",
    responses(
        (status = 200, description = "All users", body = [UserResponse]),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not an admin")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_users(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.services.users.list(&actor).await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/v1/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "Account created", body = UserResponse),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiJson(request): ApiJson<UserRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.services.users.register(&actor, request.into_register()?).await?;
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Retrieve an account (self or admin)
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    responses(
        (status = 200, description = "User", body = UserResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "No such user")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_user(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<UserResponse>> {
    let user = state.services.users.retrieve(&actor, UserId::new(id)).await?;
    Ok(Json(user.into()))
}

/// Replace an account; every writable field is required
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "No such user")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_user(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<u64>,
    request: ApiJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    write_user(state, actor, id, request, UpdateMode::Full).await
}

/// Change some account fields
#[utoipa::path(
    patch,
    path = "/api/v1/users/{id}",
    params(("id" = u64, Path, description = "User id")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "Updated user", body = UserResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the account owner"),
        (status = 404, description = "No such user")
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_user(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<u64>,
    request: ApiJson<UserRequest>,
) -> ApiResult<Json<UserResponse>> {
    write_user(state, actor, id, request, UpdateMode::Partial).await
}

async fn write_user(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<UserRequest>,
    mode: UpdateMode,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .services
        .users
        .update(&actor, UserId::new(id), mode, request.into_update())
        .await?;
    Ok(Json(user.into()))
}

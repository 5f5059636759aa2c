//! Comment handlers
//!
//! Comment ids are UUIDs; a malformed id cannot name a comment and is
//! reported as not found once the caller is authenticated.

use axum::{extract::State, http::StatusCode, Json};
use softdesk_application::{ApplicationError, UpdateMode};
use softdesk_domain::CommentId;
use softdesk_permissions::Actor;

use crate::{
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath, ApiQuery, Authenticated, CurrentActor},
    models::{CommentQuery, CommentRequest, CommentResponse},
    state::AppState,
};

fn parse_comment_id(actor: &Actor, raw: &str) -> ApiResult<CommentId> {
    if matches!(actor, Actor::Anonymous) {
        return Err(ApplicationError::NotAuthenticated.into());
    }
    CommentId::from_string(raw).map_err(|_| ApiError::NotFound(format!("Comment {raw}")))
}

/// List comments on issues of the projects the caller can see
#[utoipa::path(
    get,
    path = "/api/v1/comments",
    params(CommentQuery),
    responses(
        (status = 200, description = "Visible comments", body = [CommentResponse]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_comments(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiQuery(query): ApiQuery<CommentQuery>,
) -> ApiResult<Json<Vec<CommentResponse>>> {
    let comments = state.services.comments.list(&actor, &query.into()).await?;
    Ok(Json(comments.into_iter().map(Into::into).collect()))
}

/// Comment on an issue; the caller is recorded as author
#[utoipa::path(
    post,
    path = "/api/v1/comments",
    request_body = CommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a contributor of the project")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_comment(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiJson(request): ApiJson<CommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let comment = state.services.comments.create(&actor, request.into_create()?).await?;
    Ok((StatusCode::CREATED, Json(comment.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment UUID")),
    responses(
        (status = 200, description = "Comment", body = CommentResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a contributor of the project"),
        (status = 404, description = "No such comment")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_comment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<Json<CommentResponse>> {
    let comment = state.services.comments.get(&actor, parse_comment_id(&actor, &id)?).await?;
    Ok(Json(comment.into()))
}

/// Replace a comment's description (author only)
#[utoipa::path(
    put,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment UUID")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such comment")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_comment(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<String>,
    request: ApiJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    write_comment(state, actor, id, request, UpdateMode::Full).await
}

#[utoipa::path(
    patch,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment UUID")),
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Updated comment", body = CommentResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such comment")
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_comment(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<String>,
    request: ApiJson<CommentRequest>,
) -> ApiResult<Json<CommentResponse>> {
    write_comment(state, actor, id, request, UpdateMode::Partial).await
}

async fn write_comment(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiPath(id): ApiPath<String>,
    ApiJson(request): ApiJson<CommentRequest>,
    mode: UpdateMode,
) -> ApiResult<Json<CommentResponse>> {
    let comment = state
        .services
        .comments
        .update(&actor, parse_comment_id(&actor, &id)?, mode, request.into_update())
        .await?;
    Ok(Json(comment.into()))
}

/// Delete a comment (author only)
#[utoipa::path(
    delete,
    path = "/api/v1/comments/{id}",
    params(("id" = String, Path, description = "Comment UUID")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such comment")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<String>,
) -> ApiResult<StatusCode> {
    state.services.comments.delete(&actor, parse_comment_id(&actor, &id)?).await?;
    Ok(StatusCode::NO_CONTENT)
}

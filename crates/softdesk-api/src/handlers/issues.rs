//! Issue handlers

use axum::{extract::State, http::StatusCode, Json};
use softdesk_application::UpdateMode;
use softdesk_domain::IssueId;

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery, Authenticated, CurrentActor},
    models::{IssueDetailResponse, IssueListItem, IssueQuery, IssueRequest},
    state::AppState,
};

/// List issues of the projects the caller can see
#[utoipa::path(
    get,
    path = "/api/v1/issues",
    params(IssueQuery),
    responses(
        (status = 200, description = "Visible issues", body = [IssueListItem]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_issues(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiQuery(query): ApiQuery<IssueQuery>,
) -> ApiResult<Json<Vec<IssueListItem>>> {
    let issues = state.services.issues.list(&actor, &query.into()).await?;
    Ok(Json(issues.into_iter().map(Into::into).collect()))
}

/// Open an issue in a project the caller contributes to
#[utoipa::path(
    post,
    path = "/api/v1/issues",
    request_body = IssueRequest,
    responses(
        (status = 201, description = "Issue created", body = IssueDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a contributor of the project")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_issue(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiJson(request): ApiJson<IssueRequest>,
) -> ApiResult<(StatusCode, Json<IssueDetailResponse>)> {
    let issue = state.services.issues.create(&actor, request.into_create()?).await?;
    Ok((StatusCode::CREATED, Json(issue.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    responses(
        (status = 200, description = "Issue", body = IssueDetailResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not a contributor of the project"),
        (status = 404, description = "No such issue")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_issue(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<IssueDetailResponse>> {
    let issue = state.services.issues.get(&actor, IssueId::new(id)).await?;
    Ok(Json(issue.into()))
}

/// Replace an issue (author only)
#[utoipa::path(
    put,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    request_body = IssueRequest,
    responses(
        (status = 200, description = "Updated issue", body = IssueDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such issue")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_issue(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<u64>,
    request: ApiJson<IssueRequest>,
) -> ApiResult<Json<IssueDetailResponse>> {
    write_issue(state, actor, id, request, UpdateMode::Full).await
}

/// Change some issue fields (author only)
#[utoipa::path(
    patch,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    request_body = IssueRequest,
    responses(
        (status = 200, description = "Updated issue", body = IssueDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such issue")
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_issue(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<u64>,
    request: ApiJson<IssueRequest>,
) -> ApiResult<Json<IssueDetailResponse>> {
    write_issue(state, actor, id, request, UpdateMode::Partial).await
}

async fn write_issue(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<IssueRequest>,
    mode: UpdateMode,
) -> ApiResult<Json<IssueDetailResponse>> {
    let issue = state
        .services
        .issues
        .update(&actor, IssueId::new(id), mode, request.into_update())
        .await?;
    Ok(Json(issue.into()))
}

/// Delete an issue with its comments (author only)
#[utoipa::path(
    delete,
    path = "/api/v1/issues/{id}",
    params(("id" = u64, Path, description = "Issue id")),
    responses(
        (status = 204, description = "Issue deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such issue")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_issue(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<StatusCode> {
    state.services.issues.delete(&actor, IssueId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

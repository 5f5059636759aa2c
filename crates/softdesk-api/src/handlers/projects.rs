//! Project handlers

use axum::{extract::State, http::StatusCode, Json};
use softdesk_application::UpdateMode;
use softdesk_domain::ProjectId;

use crate::{
    error::ApiResult,
    extract::{ApiJson, ApiPath, ApiQuery, Authenticated, CurrentActor},
    models::{
        AddContributorRequest, ProjectDetailResponse, ProjectListItem, ProjectQuery, ProjectRequest,
    },
    state::AppState,
};

/// List the projects the caller can see
#[utoipa::path(
    get,
    path = "/api/v1/projects",
    params(ProjectQuery),
    responses(
        (status = 200, description = "Visible projects", body = [ProjectListItem]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_projects(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiQuery(query): ApiQuery<ProjectQuery>,
) -> ApiResult<Json<Vec<ProjectListItem>>> {
    let projects = state.services.projects.list(&actor, &query.into()).await?;
    Ok(Json(projects.into_iter().map(Into::into).collect()))
}

/// Create a project; the caller becomes its author and first contributor
#[utoipa::path(
    post,
    path = "/api/v1/projects",
    request_body = ProjectRequest,
    responses(
        (status = 201, description = "Project created", body = ProjectDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_project(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiJson(request): ApiJson<ProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectDetailResponse>)> {
    let project = state.services.projects.create(&actor, request.into_create()?).await?;
    Ok((StatusCode::CREATED, Json(project.into())))
}

#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    params(("id" = u64, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project", body = ProjectDetailResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such project, or not visible to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_project(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    let project = state.services.projects.get(&actor, ProjectId::new(id)).await?;
    Ok(Json(project.into()))
}

/// Replace a project (author only)
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    params(("id" = u64, Path, description = "Project id")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = ProjectDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such project, or not visible to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_project(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<u64>,
    request: ApiJson<ProjectRequest>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    write_project(state, actor, id, request, UpdateMode::Full).await
}

/// Change some project fields (author only)
#[utoipa::path(
    patch,
    path = "/api/v1/projects/{id}",
    params(("id" = u64, Path, description = "Project id")),
    request_body = ProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = ProjectDetailResponse),
        (status = 400, description = "Validation failed"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such project, or not visible to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn patch_project(
    state: State<AppState>,
    actor: Authenticated,
    id: ApiPath<u64>,
    request: ApiJson<ProjectRequest>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    write_project(state, actor, id, request, UpdateMode::Partial).await
}

async fn write_project(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<ProjectRequest>,
    mode: UpdateMode,
) -> ApiResult<Json<ProjectDetailResponse>> {
    let project = state
        .services
        .projects
        .update(&actor, ProjectId::new(id), mode, request.into_update())
        .await?;
    Ok(Json(project.into()))
}

/// Delete a project with its issues and comments (author only)
#[utoipa::path(
    delete,
    path = "/api/v1/projects/{id}",
    params(("id" = u64, Path, description = "Project id")),
    responses(
        (status = 204, description = "Project deleted"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Not the author"),
        (status = 404, description = "No such project, or not visible to the caller")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_project(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<StatusCode> {
    state.services.projects.delete(&actor, ProjectId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a user to the project's contributors; adding an existing member is a no-op
#[utoipa::path(
    post,
    path = "/api/v1/projects/{id}/add_contributor",
    params(("id" = u64, Path, description = "Project id")),
    request_body = AddContributorRequest,
    responses(
        (status = 200, description = "Project with its updated contributors", body = ProjectDetailResponse),
        (status = 400, description = "Username missing"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No such project or user")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_contributor(
    State(state): State<AppState>,
    Authenticated(actor): Authenticated,
    ApiPath(id): ApiPath<u64>,
    ApiJson(request): ApiJson<AddContributorRequest>,
) -> ApiResult<Json<ProjectDetailResponse>> {
    let project = state
        .services
        .projects
        .add_contributor(&actor, ProjectId::new(id), request.into())
        .await?;
    Ok(Json(project.into()))
}

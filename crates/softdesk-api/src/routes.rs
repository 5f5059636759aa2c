//! API route definitions

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    handlers::{auth, comments, health, issues, projects, users},
    middleware::logging_middleware,
    models,
    state::AppState,
};

/// API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Authentication
        .route("/api/v1/auth/login", post(auth::login))
        // Users
        .route("/api/v1/users", get(users::list_users).post(users::create_user))
        .route(
            "/api/v1/users/:id",
            get(users::get_user).put(users::update_user).patch(users::patch_user),
        )
        // Projects
        .route(
            "/api/v1/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/api/v1/projects/:id",
            get(projects::get_project)
                .put(projects::update_project)
                .patch(projects::patch_project)
                .delete(projects::delete_project),
        )
        .route(
            "/api/v1/projects/:id/add_contributor",
            post(projects::add_contributor),
        )
        // Issues
        .route("/api/v1/issues", get(issues::list_issues).post(issues::create_issue))
        .route(
            "/api/v1/issues/:id",
            get(issues::get_issue)
                .put(issues::update_issue)
                .patch(issues::patch_issue)
                .delete(issues::delete_issue),
        )
        // Comments
        .route(
            "/api/v1/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/api/v1/comments/:id",
            get(comments::get_comment)
                .put(comments::update_comment)
                .patch(comments::patch_comment)
                .delete(comments::delete_comment),
        )
}

/// Swagger UI routes
pub fn swagger_routes() -> Router<AppState> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}

/// The complete application: routes, documentation and middleware
pub fn app(state: AppState) -> Router {
    api_routes()
        .merge(swagger_routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        users::list_users,
        users::create_user,
        users::get_user,
        users::update_user,
        users::patch_user,
        projects::list_projects,
        projects::create_project,
        projects::get_project,
        projects::update_project,
        projects::patch_project,
        projects::delete_project,
        projects::add_contributor,
        issues::list_issues,
        issues::create_issue,
        issues::get_issue,
        issues::update_issue,
        issues::patch_issue,
        issues::delete_issue,
        comments::list_comments,
        comments::create_comment,
        comments::get_comment,
        comments::update_comment,
        comments::patch_comment,
        comments::delete_comment,
    ),
    components(schemas(
        models::LoginRequest,
        models::TokenResponse,
        models::UserRequest,
        models::UserResponse,
        models::ProjectRequest,
        models::AddContributorRequest,
        models::ProjectListItem,
        models::ContributorResponse,
        models::ProjectDetailResponse,
        models::IssueRequest,
        models::IssueListItem,
        models::IssueDetailResponse,
        models::CommentRequest,
        models::CommentResponse,
        models::HealthResponse,
    )),
    modifiers(&BearerAuth),
    info(
        title = "SoftDesk API",
        version = "1.0.0",
        description = "Project, issue and comment tracking with per-project access control"
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

//! API error types and handling

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use softdesk_application::ApplicationError;
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("You do not have permission to perform this action.")]
    Authorization,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn required(field: &str) -> Self {
        ApiError::Validation {
            field: field.to_string(),
            message: "This field is required.".to_string(),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::ValidationFailed { field, reason } => ApiError::Validation {
                field,
                message: reason,
            },
            ApplicationError::NotAuthenticated => {
                ApiError::Authentication("credentials were not provided or are invalid".to_string())
            }
            ApplicationError::PermissionDenied => ApiError::Authorization,
            ApplicationError::NotFound { entity, id } => ApiError::NotFound(format!("{entity} {id}")),
            ApplicationError::RepositoryError(message) | ApplicationError::Internal(message) => {
                ApiError::Internal(message)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::NotFound(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::Validation { .. } => (StatusCode::BAD_REQUEST, "validation_error"),
            ApiError::Authentication(_) => (StatusCode::UNAUTHORIZED, "authentication_error"),
            ApiError::Authorization => (StatusCode::FORBIDDEN, "authorization_error"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = match &self {
            ApiError::Validation { field, message } => json!({
                "error": {
                    "type": error_type,
                    "field": field,
                    "message": message,
                }
            }),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "Request failed with internal error");
                json!({
                    "error": {
                        "type": error_type,
                        "message": "Internal server error",
                    }
                })
            }
            _ => json!({
                "error": {
                    "type": error_type,
                    "message": self.to_string(),
                }
            }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

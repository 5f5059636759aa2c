//! SoftDesk RESTful API
//!
//! HTTP surface of the issue tracker: axum handlers over the application
//! services, bearer-token authentication and an OpenAPI document served
//! through Swagger UI.

pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::{app, ApiDoc};
pub use state::AppState;

//! Request logging middleware

use std::time::{Duration, Instant};

use axum::{body::Body, http::Request, middleware::Next, response::Response};

/// Requests slower than this are logged at `warn`
pub const SLOW_REQUEST_THRESHOLD: Duration = Duration::from_millis(100);

/// Log method, path, status and latency of every request
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    if elapsed > SLOW_REQUEST_THRESHOLD {
        tracing::warn!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "Slow request");
    } else {
        tracing::info!(%method, %path, status, elapsed_ms = elapsed.as_millis() as u64, "Request completed");
    }

    response
}

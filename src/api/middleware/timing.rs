//! Execution time logging for administrative routes.

use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};

/// Log how long the wrapped handler took, together with method, path and status.
pub async fn log_execution_time(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Executed admin request"
    );

    response
}

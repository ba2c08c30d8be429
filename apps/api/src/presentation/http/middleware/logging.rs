use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

/// One access-log line per request: method, URI, status and latency.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    tracing::info!(
        "{} {} {} - {:?}",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}

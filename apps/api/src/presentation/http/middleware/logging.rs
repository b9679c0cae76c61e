use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;
    tracing::info!(
        "Request: {} {} -> {} in {:?}",
        method,
        uri,
        response.status(),
        start.elapsed()
    );
    response
}

//! HTTP metrics middleware.
//!
//! Records a request counter and duration histogram for every request and
//! emits one log line per response.

use axum::{
    body::Body,
    extract::MatchedPath,
    http::Request,
    middleware::Next,
    response::Response,
};

use crate::metrics::{self, Timer};

/// Record count, duration, and a log line for each request.
pub async fn metrics_middleware(request: Request<Body>, next: Next) -> Response {
    let timer = Timer::new();

    // Extract method and path before consuming the request. The matched route
    // pattern keeps the endpoint label low-cardinality.
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let endpoint = request
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| path.clone());

    let response = next.run(request).await;

    let duration = timer.elapsed_secs();
    let status = response.status().as_u16();

    metrics::record_http_request(&method, &endpoint, status, duration);
    tracing::info!("{} {} - {} - {:.3}s", method, path, status, duration);

    response
}

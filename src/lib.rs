pub mod api;
pub mod config;
pub mod db;
pub mod metrics;
pub mod models;
pub mod utils;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::db::Database;

/// Process-scoped context constructed once at startup and passed to handlers.
pub struct AppState {
    pub config: AppConfig,
    pub db: Database,
    pub metrics_handle: PrometheusHandle,
}

/// Build the full application router: API routes, metrics scrape endpoint,
/// metrics middleware, permissive CORS, and request tracing.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/metrics", get(api::handlers::metrics::scrape))
        .nest("/api", api::routes::create_router())
        .layer(axum_middleware::from_fn(api::middleware::metrics_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

use axum::{extract::State, http::header, response::IntoResponse};
use std::sync::Arc;

use crate::metrics::EXPOSITION_CONTENT_TYPE;
use crate::AppState;

/// Render accumulated metrics in Prometheus text exposition format.
pub async fn scrape(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, EXPOSITION_CONTENT_TYPE)],
        state.metrics_handle.render(),
    )
}

//! Prometheus metrics.
//!
//! Counters and histograms go through the `metrics` crate's global registry,
//! so increments are atomic across concurrent requests. The handle returned by
//! [`init_metrics`] renders the accumulated state in text exposition format.

use ::metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::time::Instant;

/// Metric names as constants for consistency
pub mod names {
    pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";
    pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
}

/// Label keys
pub mod labels {
    pub const METHOD: &str = "method";
    pub const ENDPOINT: &str = "endpoint";
    pub const STATUS: &str = "status";
}

/// Content type of the text exposition format served by `/metrics`.
pub const EXPOSITION_CONTENT_TYPE: &str = "text/plain; version=0.0.4";

/// Install the Prometheus recorder and return the render handle.
pub fn init_metrics() -> PrometheusHandle {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(names::HTTP_REQUEST_DURATION_SECONDS.to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0],
        )
        .expect("histogram buckets must be non-empty")
        .install_recorder()
        .expect("failed to install Prometheus recorder")
}

/// Record one completed HTTP request.
pub fn record_http_request(method: &str, endpoint: &str, status: u16, duration_secs: f64) {
    counter!(
        names::HTTP_REQUESTS_TOTAL,
        labels::METHOD => method.to_string(),
        labels::ENDPOINT => endpoint.to_string(),
        labels::STATUS => status.to_string()
    )
    .increment(1);

    histogram!(
        names::HTTP_REQUEST_DURATION_SECONDS,
        labels::METHOD => method.to_string(),
        labels::ENDPOINT => endpoint.to_string()
    )
    .record(duration_secs);
}

/// Timer for measuring durations
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in seconds
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

//! Router-level tests that run without a live Postgres.
//!
//! The pool points at a closed local port, so store-dependent paths exercise
//! the failure branches while validation paths never reach the store.

use std::sync::{Arc, OnceLock};
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use http_body_util::BodyExt;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use items_backend::config::AppConfig;
use items_backend::db::Database;
use items_backend::{app, metrics, AppState};

fn test_state() -> Arc<AppState> {
    // The Prometheus recorder is a process-wide global; install it once.
    static HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
    let metrics_handle = HANDLE.get_or_init(metrics::init_metrics).clone();

    let config = AppConfig {
        db_host: "127.0.0.1".to_string(),
        db_port: 1, // nothing listens here
        db_name: "items_test".to_string(),
        db_user: "postgres".to_string(),
        db_password: "postgres".to_string(),
        port: 5000,
    };

    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .connect_lazy(&config.database_url())
        .expect("valid database url");

    Arc::new(AppState {
        config,
        db: Database { pool },
        metrics_handle,
    })
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_without_name_returns_400() {
    let response = app(test_state())
        .oneshot(post_json("/api/items", "{}"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name is required");
}

#[tokio::test]
async fn create_without_body_returns_400() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/items")
        .body(Body::empty())
        .unwrap();

    let response = app(test_state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name is required");
}

#[tokio::test]
async fn create_with_empty_name_returns_400() {
    let response = app(test_state())
        .oneshot(post_json("/api/items", r#"{"name": ""}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name cannot be empty");
}

#[tokio::test]
async fn create_with_whitespace_name_returns_400() {
    let response = app(test_state())
        .oneshot(post_json("/api/items", r#"{"name": "   "}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name cannot be empty");
}

#[tokio::test]
async fn create_with_valid_name_reports_store_failure_as_500() {
    let response = app(test_state())
        .oneshot(post_json("/api/items", r#"{"name": "Widget"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn list_reports_store_failure_as_500() {
    let request = Request::builder()
        .uri("/api/items")
        .body(Body::empty())
        .unwrap();

    let response = app(test_state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn delete_with_non_integer_id_is_rejected() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/api/items/abc")
        .body(Body::empty())
        .unwrap();

    let response = app(test_state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_returns_503_when_store_unreachable() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app(test_state()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let json = body_json(response).await;
    assert_eq!(json["status"], "unhealthy");
    assert_eq!(json["database"], "disconnected");
    assert!(json["error"].is_string());
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn metrics_endpoint_serves_text_exposition() {
    let state = test_state();

    // Drive one request through the middleware so the counter exists.
    let _ = app(state.clone())
        .oneshot(post_json("/api/items", "{}"))
        .await
        .unwrap();

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = app(state).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/plain"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(body.contains("http_requests_total"));
}

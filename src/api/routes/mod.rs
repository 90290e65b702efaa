use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::AppState;

pub fn create_router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/items", get(handlers::item::list_items))
        .route("/items", post(handlers::item::create_item))
        .route("/items/:id", delete(handlers::item::delete_item))
}

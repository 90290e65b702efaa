use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::models::{CreateItemRequest, DeleteItemResponse, Item};
use crate::utils::response::AppError;
use crate::AppState;

/// List all items, newest first.
pub async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.db.list_items().await?;
    Ok(Json(items))
}

/// Create an item from `{name}`. Absent/malformed bodies and missing `name`
/// are reported before the blank-name check.
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let Json(request) = payload.map_err(|_| AppError::validation("Name is required"))?;
    let name = request.validated_name().map_err(AppError::validation)?;

    let item = state.db.insert_item(&name).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete an item by id.
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteItemResponse>, AppError> {
    if !state.db.delete_item(id).await? {
        return Err(AppError::not_found("Item not found"));
    }
    Ok(Json(DeleteItemResponse {
        message: "Item deleted successfully".to_string(),
    }))
}

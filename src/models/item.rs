use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A persisted item. The store assigns `id` and `created_at`; both are
/// immutable once set.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateItemRequest {
    pub name: Option<String>,
}

impl CreateItemRequest {
    /// Validate and trim the requested name.
    ///
    /// Returns the trimmed name, or the client-facing error message when the
    /// field is missing or blank. Validation order matters: a missing field is
    /// reported before an empty one.
    pub fn validated_name(&self) -> Result<String, &'static str> {
        let name = self.name.as_deref().ok_or("Name is required")?;
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err("Name cannot be empty");
        }
        Ok(trimmed.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteItemResponse {
    pub message: String,
}

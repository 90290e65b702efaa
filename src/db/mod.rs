//! Database gateway.
//!
//! All persisted item state lives in Postgres; the service keeps no in-memory
//! copy between requests. Statements go through a shared connection pool and
//! connections are released on every exit path when the acquired handle drops.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::models::Item;

#[derive(Debug, Clone)]
pub struct Database {
    pub pool: PgPool,
}

impl Database {
    /// Build the connection pool without touching the server.
    ///
    /// The pool is lazy so an unreachable store never blocks startup; the
    /// first statement on each connection surfaces the failure instead.
    pub fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_lazy(database_url)?;
        Ok(Self { pool })
    }

    /// Ensure the `items` table exists. Safe to run repeatedly.
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS items (
                id SERIAL PRIMARY KEY,
                name VARCHAR(255) NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Trivial round-trip used by the health check.
    pub async fn ping(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// All items, newest first.
    pub async fn list_items(&self) -> Result<Vec<Item>, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            "SELECT id, name, created_at FROM items ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Insert a new item; the store assigns `id` and `created_at`.
    pub async fn insert_item(&self, name: &str) -> Result<Item, sqlx::Error> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (name) VALUES ($1) RETURNING id, name, created_at",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
    }

    /// Delete by id. Returns true when a row matched.
    pub async fn delete_item(&self, id: i32) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

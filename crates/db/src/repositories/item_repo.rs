//! Repository for the `items` table.

use sqlx::PgPool;

use pantry_core::types::ItemId;

use crate::models::item::ItemRow;

/// Column list for `items` queries.
const ITEM_COLUMNS: &str = "id, name, bought, created_at";

/// Provides CRUD operations for shopping-list items.
pub struct ItemRepo;

impl ItemRepo {
    /// List all items, newest first. `id` breaks ties between rows created
    /// in the same instant.
    ///
    /// A full scan: the expected scale is a personal list, so no pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<ItemRow>, sqlx::Error> {
        let query =
            format!("SELECT {ITEM_COLUMNS} FROM items ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, ItemRow>(&query).fetch_all(pool).await
    }

    /// Insert a new item. `bought` starts false via the column default.
    ///
    /// The caller is expected to have normalized `name` already
    /// (see `pantry_core::item::parse_item_name`).
    pub async fn create(pool: &PgPool, name: &str) -> Result<ItemRow, sqlx::Error> {
        let query = format!("INSERT INTO items (name) VALUES ($1) RETURNING {ITEM_COLUMNS}");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Set the `bought` flag on an item.
    ///
    /// Returns `None` if no item with the given id exists.
    pub async fn set_bought(
        pool: &PgPool,
        id: ItemId,
        bought: bool,
    ) -> Result<Option<ItemRow>, sqlx::Error> {
        let query =
            format!("UPDATE items SET bought = $2 WHERE id = $1 RETURNING {ITEM_COLUMNS}");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .bind(bought)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item by id. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: ItemId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

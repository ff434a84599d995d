//! Item row model and request DTOs.

use serde::Deserialize;
use sqlx::FromRow;

use pantry_core::item::Item;
use pantry_core::types::{ItemId, Timestamp};

/// A row from the `items` table.
///
/// Carries `created_at`, which never crosses the wire; convert to
/// [`Item`] before serializing a response.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: ItemId,
    pub name: String,
    pub bought: bool,
    pub created_at: Timestamp,
}

impl From<ItemRow> for Item {
    fn from(row: ItemRow) -> Self {
        Item {
            id: row.id,
            name: row.name,
            bought: row.bought,
        }
    }
}

/// DTO for `POST /items`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
}

/// DTO for `PUT /items/{id}`.
///
/// `bought` is strictly boolean; any other JSON type fails body
/// deserialization and surfaces as a 400.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
    pub bought: bool,
}

//! The shopping-list item entity and its parse functions.
//!
//! Validation is expressed as explicit parse functions returning a tagged
//! result: callers get a normalized value or a [`CoreError::Validation`]
//! naming the failed constraint. Both run before any store access, so
//! malformed input never reaches persistence.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::ItemId;

/// Minimum trimmed length of an item name.
pub const ITEM_NAME_MIN_LEN: usize = 1;

/// Maximum trimmed length of an item name.
pub const ITEM_NAME_MAX_LEN: usize = 100;

/// Wire representation of a shopping-list item.
///
/// Serialized by the server and deserialized by the client, so both sides
/// share one shape contract. The creation timestamp is deliberately absent:
/// it only influences listing order and is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub bought: bool,
}

/// Parse and normalize an item name.
///
/// Trims surrounding whitespace, then enforces the
/// `[ITEM_NAME_MIN_LEN, ITEM_NAME_MAX_LEN]` bounds, counted in Unicode
/// scalar values. Returns the trimmed name.
pub fn parse_item_name(raw: &str) -> Result<String, CoreError> {
    let trimmed = raw.trim();
    let len = trimmed.chars().count();

    if len < ITEM_NAME_MIN_LEN {
        return Err(CoreError::Validation("Name must not be empty".into()));
    }
    if len > ITEM_NAME_MAX_LEN {
        return Err(CoreError::Validation(format!(
            "Name must be at most {ITEM_NAME_MAX_LEN} characters"
        )));
    }

    Ok(trimmed.to_string())
}

/// Parse an item identifier from its path representation.
///
/// Rejects anything that is not a well-formed UUID so malformed ids surface
/// as validation failures rather than store-level cast errors.
pub fn parse_item_id(raw: &str) -> Result<ItemId, CoreError> {
    raw.parse::<ItemId>()
        .map_err(|_| CoreError::Validation("Invalid id".into()))
}

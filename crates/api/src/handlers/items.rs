//! Handlers for the shopping-list item endpoints.
//!
//! Each request runs the same pipeline: identifier parse (where the route
//! carries one), body parse, repository call, outcome-to-response mapping.
//! Identifier and name parsing happen before any store access.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pantry_core::error::CoreError;
use pantry_core::item::{parse_item_id, parse_item_name, Item};
use pantry_db::models::item::{CreateItemRequest, UpdateItemRequest};
use pantry_db::repositories::ItemRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ApiJson;
use crate::state::AppState;

/// GET /items
///
/// List all items, newest first.
pub async fn list_items(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let rows = ItemRepo::list(&state.pool).await?;
    let items: Vec<Item> = rows.into_iter().map(Item::from).collect();

    Ok(Json(items))
}

/// POST /items
///
/// Create a new item. The name is trimmed and length-checked before the
/// store is touched; `bought` always starts false.
pub async fn create_item(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateItemRequest>,
) -> AppResult<impl IntoResponse> {
    let name = parse_item_name(&input.name)?;

    let row = ItemRepo::create(&state.pool, &name).await?;

    tracing::info!(item_id = %row.id, "Item created");

    Ok((StatusCode::CREATED, Json(Item::from(row))))
}

/// PUT /items/{id}
///
/// Set an item's `bought` flag. The body arrives as a `Result` so that a
/// request with a bad identifier is rejected with "Invalid id" even when
/// its body would not deserialize either.
pub async fn update_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Result<ApiJson<UpdateItemRequest>, AppError>,
) -> AppResult<impl IntoResponse> {
    let id = parse_item_id(&raw_id)?;
    let ApiJson(input) = body?;

    let row = ItemRepo::set_bought(&state.pool, id, input.bought)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Item", id }))?;

    tracing::info!(item_id = %id, bought = input.bought, "Item updated");

    Ok(Json(Item::from(row)))
}

/// DELETE /items/{id}
///
/// Delete an item.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let id = parse_item_id(&raw_id)?;

    let deleted = ItemRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Item", id }));
    }

    tracing::info!(item_id = %id, "Item deleted");

    Ok(StatusCode::NO_CONTENT)
}

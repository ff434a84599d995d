//! Route definitions for shopping-list items.
//!
//! ```text
//! GET    /       -> list_items
//! POST   /       -> create_item
//! PUT    /{id}   -> update_item
//! DELETE /{id}   -> delete_item
//! ```

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::items;
use crate::state::AppState;

/// Item routes, mounted at `/items`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(items::list_items).post(items::create_item))
        .route("/{id}", put(items::update_item).delete(items::delete_item))
}

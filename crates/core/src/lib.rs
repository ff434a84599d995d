//! Domain types for the Pantry shopping list.
//!
//! Pure logic only: the item entity, its parse functions, and the error
//! kinds the rest of the workspace maps to HTTP statuses. No I/O.

pub mod error;
pub mod item;
pub mod types;

//! Terminal client for the Pantry shopping-list API.
//!
//! Split the same way as the server: a typed data layer over the HTTP API
//! (`api`), a state controller owning the in-memory list and the
//! pending-operation set (`controller`), and pure presentation functions
//! (`view`). The binary in `main.rs` wires them into a small REPL and owns
//! no business logic.

pub mod api;
pub mod controller;
pub mod view;

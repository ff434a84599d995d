//! Request body extraction with error mapping.
//!
//! Axum's default `Json` rejection produces a plain-text body; the API
//! contract requires every failure body to be `{message}`. [`ApiJson`]
//! routes deserialization failures through [`AppError`] instead.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with rejections mapped to 400 `{message}` responses.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

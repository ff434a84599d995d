//! Typed HTTP wrappers for the items API.
//!
//! Every call either returns a value deserialized against the shared
//! [`Item`] shape contract or an [`ApiError`] carrying a human-readable
//! message, extracted from the server's `{message}` body when present.

use serde::Deserialize;

use pantry_core::item::Item;
use pantry_core::types::ItemId;

/// Error body shape returned by the server on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Errors from the items API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The server returned a 2xx response whose body did not match the
    /// expected shape.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ApiError {
    /// The message safe to surface to the user.
    ///
    /// Server-provided messages pass through verbatim; transport and shape
    /// failures collapse to a generic message -- never a stack trace.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Api { message, .. } => message.clone(),
            _ => "Something went wrong".to_string(),
        }
    }
}

/// HTTP client for the items API.
pub struct ItemsApi {
    client: reqwest::Client,
    base_url: String,
}

impl ItemsApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:3001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /items -- fetch the full list, newest first.
    pub async fn list(&self) -> Result<Vec<Item>, ApiError> {
        let response = self
            .client
            .get(format!("{}/items", self.base_url))
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// POST /items -- create an item with the given name.
    pub async fn create(&self, name: &str) -> Result<Item, ApiError> {
        let body = serde_json::json!({ "name": name });

        let response = self
            .client
            .post(format!("{}/items", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// PUT /items/{id} -- set an item's `bought` flag.
    pub async fn update(&self, id: ItemId, bought: bool) -> Result<Item, ApiError> {
        let body = serde_json::json!({ "bought": bought });

        let response = self
            .client
            .put(format!("{}/items/{id}", self.base_url))
            .json(&body)
            .send()
            .await?;

        Self::parse_json(response).await
    }

    /// DELETE /items/{id} -- delete an item. No body on success.
    pub async fn delete(&self, id: ItemId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/items/{id}", self.base_url))
            .send()
            .await?;

        Self::check_status(response).await?;
        Ok(())
    }

    /// Read a success body as `T`, or extract the server's error message.
    async fn parse_json<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::check_status(response).await?;
        let bytes = response.bytes().await?;

        serde_json::from_slice(&bytes).map_err(|e| ApiError::UnexpectedResponse(e.to_string()))
    }

    /// Pass 2xx responses through; turn anything else into
    /// [`ApiError::Api`], extracting the `{message}` body when present.
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => "Request failed".to_string(),
        };

        Err(ApiError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

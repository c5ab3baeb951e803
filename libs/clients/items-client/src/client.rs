use axum_helpers::{ErrorResponse, HealthResponse};
use core_config::env_or_default;
use domain_items::{CreateItem, DeleteItemResponse, Item, ItemId, MessageResponse, UpdateItem};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the API base URL.
pub const ITEMS_API_URL_ENV: &str = "ITEMS_API_URL";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client for the Items API.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ItemsClient {
    base_url: String,
    client: Client,
}

impl ItemsClient {
    /// Create a client for the server at `base_url` (e.g. `http://localhost:8080`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    /// Create a client that reuses an existing `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    /// Create a client from `ITEMS_API_URL`, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        Self::new(env_or_default(ITEMS_API_URL_ENV, DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn item_url(&self, id: ItemId) -> String {
        self.url(&format!("/api/items/{id}"))
    }

    /// `GET /health`
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        self.send(self.client.get(self.url("/health"))).await
    }

    /// `GET /`
    pub async fn greeting(&self) -> ClientResult<MessageResponse> {
        self.send(self.client.get(self.url("/"))).await
    }

    /// `GET /api/items`
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ClientResult<Vec<Item>> {
        self.send(self.client.get(self.url("/api/items"))).await
    }

    /// `GET /api/items/{id}`
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ClientResult<Item> {
        self.send(self.client.get(self.item_url(id))).await
    }

    /// `POST /api/items`
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: &CreateItem) -> ClientResult<Item> {
        self.send(self.client.post(self.url("/api/items")).json(input))
            .await
    }

    /// `PUT /api/items/{id}`
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: ItemId, input: &UpdateItem) -> ClientResult<Item> {
        self.send(self.client.put(self.item_url(id)).json(input)).await
    }

    /// `DELETE /api/items/{id}`
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ClientResult<DeleteItemResponse> {
        self.send(self.client.delete(self.item_url(id))).await
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = request.send().await?;
        decode(response).await
    }
}

/// Deserialize a success body, or turn an error status into [`ClientError::Api`].
async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    debug!(status = %status, url = %response.url(), "Received response");

    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    // Fall back to the raw body, then the reason phrase, when the server
    // didn't answer with the error envelope.
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => envelope.message,
        Err(_) if !body.trim().is_empty() => body,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string(),
    };

    Err(ClientError::Api { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ItemsClient::new("http://localhost:9000/");
        assert_eq!(client.base_url(), "http://localhost:9000");
        assert_eq!(client.item_url(4), "http://localhost:9000/api/items/4");
    }

    #[test]
    fn test_from_env_uses_items_api_url() {
        temp_env::with_var(ITEMS_API_URL_ENV, Some("http://items.internal:3000"), || {
            assert_eq!(ItemsClient::from_env().base_url(), "http://items.internal:3000");
        });
    }

    #[test]
    fn test_from_env_default() {
        temp_env::with_var_unset(ITEMS_API_URL_ENV, || {
            assert_eq!(ItemsClient::from_env().base_url(), DEFAULT_BASE_URL);
        });
    }
}

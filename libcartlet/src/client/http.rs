//! HTTP implementation of the storefront API

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::StoreApi;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::types::{CartItem, InventoryItem, NewCartItem, QuantityPatch};

/// `StoreApi` over HTTP via a shared `reqwest::Client`.
///
/// Built without a request timeout on purpose: calls are one-shot and the
/// caller owns the decision to abandon them.
#[derive(Debug, Clone)]
pub struct HttpStoreClient {
    client: Client,
    base_url: String,
}

impl HttpStoreClient {
    /// Create a new client from configuration
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_base_url(config.base_url.clone())
    }

    /// Create a new client against an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Turn a response into parsed JSON or the matching `ApiError`.
    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.map_err(ApiError::from)?;
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        Ok(response.json().await.map_err(ApiError::from)?)
    }
}

#[async_trait]
impl StoreApi for HttpStoreClient {
    async fn list_inventory(&self) -> Result<Vec<InventoryItem>> {
        let response = self
            .client
            .get(self.url("inventory"))
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::handle(response).await
    }

    async fn list_cart(&self) -> Result<Vec<CartItem>> {
        let response = self
            .client
            .get(self.url("cart"))
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::handle(response).await
    }

    async fn add_cart_item(&self, item: &NewCartItem) -> Result<CartItem> {
        let response = self
            .client
            .post(self.url("cart"))
            .json(item)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::handle(response).await
    }

    async fn update_cart_item(&self, id: &str, quantity: i64) -> Result<CartItem> {
        let body = QuantityPatch {
            id: id.to_string(),
            quantity,
        };
        let response = self
            .client
            .patch(self.url(&format!("cart/{}", id)))
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::handle(response).await
    }

    async fn delete_cart_item(&self, id: &str) -> Result<CartItem> {
        let response = self
            .client
            .delete(self.url(&format!("cart/{}", id)))
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::handle(response).await
    }
}

// HTTP implementation of the CatalogLookup port.
//
// Endpoints
// - GET {base_url}/products/{id} -> Product
// - GET {base_url}/stock/{id}    -> Stock

use crate::modules::cart::adapters::outbound::catalog::{CatalogError, CatalogLookup};
use crate::modules::cart::core::product::Product;
use crate::modules::cart::core::stock::Stock;
use crate::shared::core::primitives::ProductId;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url))
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        resource: &'static str,
        collection: &str,
        id: ProductId,
    ) -> Result<Option<T>, CatalogError> {
        let url = format!("{}/{collection}/{id}", self.base_url);
        tracing::debug!(%url, "catalog lookup");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound { resource, id });
        }
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        if body.is_empty() {
            return Ok(None);
        }
        serde_json::from_slice::<Option<T>>(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl CatalogLookup for HttpCatalog {
    async fn product(&self, product_id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.fetch("product", "products", product_id).await
    }

    async fn stock(&self, product_id: ProductId) -> Result<Option<Stock>, CatalogError> {
        self.fetch("stock", "stock", product_id).await
    }
}

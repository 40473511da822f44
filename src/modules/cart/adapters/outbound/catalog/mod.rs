// Remote product and stock lookup port.
//
// Contract
// - `Ok(Some(record))` when the service returned a record.
// - `Ok(None)` when it answered successfully without one (empty or null body).
// - `Err(CatalogError)` for everything else. Callers do not branch on HTTP status codes.

pub mod http;
pub mod in_memory;

use crate::modules::cart::core::product::Product;
use crate::modules::cart::core::stock::Stock;
use crate::shared::core::primitives::ProductId;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: ProductId },

    #[error("catalog responded with status {status} for {url}")]
    Status { status: u16, url: String },

    #[error("catalog unreachable: {0}")]
    Transport(String),

    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn product(&self, product_id: ProductId) -> Result<Option<Product>, CatalogError>;
    async fn stock(&self, product_id: ProductId) -> Result<Option<Stock>, CatalogError>;
}

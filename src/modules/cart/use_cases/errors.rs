use crate::modules::cart::adapters::outbound::catalog::CatalogError;
use crate::modules::cart::core::decision::DecideError;
use crate::shared::core::primitives::ProductId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("product {0} not found in the catalog")]
    ProductNotFound(ProductId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("domain rejected: {0}")]
    Domain(#[from] DecideError),
}

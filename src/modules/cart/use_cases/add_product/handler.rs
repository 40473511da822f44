// Adds one unit of a product to the cart.
//
// Flow
// - Look up the product, then its stock. No gate is held while waiting on the catalog.
// - Take the write gate and decide against the fresh snapshot.
// - Commit. Any failure returns before the commit.

use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::adapters::outbound::catalog::{CatalogError, CatalogLookup};
use crate::modules::cart::core::decide::decide_add;
use crate::modules::cart::use_cases::errors::CartError;
use crate::shared::core::primitives::ProductId;
use std::sync::Arc;

pub struct AddProductHandler {
    catalog: Arc<dyn CatalogLookup>,
    store: Arc<CartStore>,
}

impl AddProductHandler {
    pub fn new(catalog: Arc<dyn CatalogLookup>, store: Arc<CartStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, product_id: ProductId) -> Result<(), CartError> {
        let product = match self.catalog.product(product_id).await {
            Ok(Some(product)) => product,
            Ok(None) | Err(CatalogError::NotFound { .. }) => {
                return Err(CartError::ProductNotFound(product_id));
            }
            Err(e) => return Err(e.into()),
        };
        let stock = self.catalog.stock(product_id).await?;

        let transaction = self.store.begin().await;
        let next = decide_add(transaction.snapshot(), product, stock.as_ref())?;
        let committed = transaction.commit(next).await;
        tracing::debug!(product_id, amount = committed.amount_of(product_id), "product added");
        Ok(())
    }
}

// In memory implementation of the CatalogLookup port.
//
// Purpose
// - Support handler tests and local development without a running catalog service.
//
// Responsibilities
// - Serve products and stock records from maps. Unknown ids resolve to `Ok(None)`.
// - Simulate an unreachable service and slow responses.

use crate::modules::cart::adapters::outbound::catalog::{CatalogError, CatalogLookup};
use crate::modules::cart::core::product::Product;
use crate::modules::cart::core::stock::Stock;
use crate::shared::core::primitives::{Amount, ProductId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
    stock: RwLock<HashMap<ProductId, Stock>>,
    delay_ms: AtomicU64,
    is_offline: bool,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product, stock_amount: Amount) -> Self {
        let id = product.id;
        self.products.get_mut().insert(id, product);
        self.stock.get_mut().insert(
            id,
            Stock {
                id,
                amount: stock_amount,
            },
        );
        self
    }

    /// Registers a product that has no stock record.
    pub fn with_unstocked_product(mut self, product: Product) -> Self {
        self.products.get_mut().insert(product.id, product);
        self
    }

    pub async fn set_stock(&self, product_id: ProductId, amount: Amount) {
        self.stock.write().await.insert(
            product_id,
            Stock {
                id: product_id,
                amount,
            },
        );
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn set_delay_ms(&self, delay_ms: u64) {
        self.delay_ms.store(delay_ms, Ordering::SeqCst);
    }

    async fn simulate_network(&self) -> Result<(), CatalogError> {
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.is_offline {
            return Err(CatalogError::Transport("Catalog offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn product(&self, product_id: ProductId) -> Result<Option<Product>, CatalogError> {
        self.simulate_network().await?;
        Ok(self.products.read().await.get(&product_id).cloned())
    }

    async fn stock(&self, product_id: ProductId) -> Result<Option<Stock>, CatalogError> {
        self.simulate_network().await?;
        Ok(self.stock.read().await.get(&product_id).copied())
    }
}

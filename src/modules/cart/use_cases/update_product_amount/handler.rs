// Sets the quantity of a line-item.
//
// Flow
// - Reject non-positive amounts before touching anything.
// - Require the line-item, then look up the stock without holding the write gate.
// - Take the gate, decide against the fresh snapshot, then commit.

use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::adapters::outbound::catalog::CatalogLookup;
use crate::modules::cart::core::decide::{decide_update_amount, ensure_in_cart, ensure_valid_amount};
use crate::modules::cart::use_cases::errors::CartError;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use std::sync::Arc;

pub struct UpdateProductAmountHandler {
    catalog: Arc<dyn CatalogLookup>,
    store: Arc<CartStore>,
}

impl UpdateProductAmountHandler {
    pub fn new(catalog: Arc<dyn CatalogLookup>, store: Arc<CartStore>) -> Self {
        Self { catalog, store }
    }

    pub async fn handle(&self, command: UpdateProductAmount) -> Result<(), CartError> {
        let UpdateProductAmount { product_id, amount } = command;
        ensure_valid_amount(amount)?;

        ensure_in_cart(&self.store.current(), product_id)?;

        let stock = self.catalog.stock(product_id).await?;
        let transaction = self.store.begin().await;
        let next = decide_update_amount(transaction.snapshot(), product_id, amount, stock.as_ref())?;
        transaction.commit(next).await;
        tracing::debug!(product_id, amount, "product amount updated");
        Ok(())
    }
}

// Composition of the cart use cases behind a single cloneable handle.
//
// Responsibilities
// - Own the observable cart state and the three mutating handlers.
// - Catch every handler error at the operation boundary, log it, and turn it
//   into a user facing notification. Callers always get `()` back.
//
// How it is used
// - Built once by the shell and passed to every consumer that needs the cart.

use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::adapters::outbound::catalog::CatalogLookup;
use crate::modules::cart::core::cart::Cart;
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::use_cases::add_product::handler::AddProductHandler;
use crate::modules::cart::use_cases::errors::CartError;
use crate::modules::cart::use_cases::remove_product::handler::RemoveProductHandler;
use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::update_product_amount::handler::UpdateProductAmountHandler;
use crate::shared::core::primitives::ProductId;
use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use crate::shared::infrastructure::notifier::{Notification, Notifier};
use std::sync::Arc;
use tokio::sync::watch;

pub const CART_STORAGE_KEY: &str = "@RocketShoes:cart";

pub const ADD_PRODUCT_FAILED: &str = "Erro na adição do produto";
pub const REMOVE_PRODUCT_FAILED: &str = "Erro na remoção do produto";
pub const UPDATE_AMOUNT_FAILED: &str = "Erro na alteração de quantidade do produto";
pub const OUT_OF_STOCK: &str = "Quantidade solicitada fora de estoque";

#[derive(Clone)]
pub struct CartManager {
    store: Arc<CartStore>,
    add_product: Arc<AddProductHandler>,
    remove_product: Arc<RemoveProductHandler>,
    update_product_amount: Arc<UpdateProductAmountHandler>,
    notifier: Arc<dyn Notifier>,
}

impl CartManager {
    pub async fn new(
        catalog: Arc<dyn CatalogLookup>,
        storage: Arc<dyn KeyValueStorage>,
        notifier: Arc<dyn Notifier>,
        storage_key: impl Into<String>,
    ) -> Self {
        let store = Arc::new(CartStore::load(storage, storage_key).await);
        Self {
            add_product: Arc::new(AddProductHandler::new(catalog.clone(), store.clone())),
            remove_product: Arc::new(RemoveProductHandler::new(store.clone())),
            update_product_amount: Arc::new(UpdateProductAmountHandler::new(catalog, store.clone())),
            store,
            notifier,
        }
    }

    pub fn cart(&self) -> Arc<Cart> {
        self.store.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.store.subscribe()
    }

    pub async fn add_product(&self, product_id: ProductId) {
        if let Err(error) = self.add_product.handle(product_id).await {
            self.report("add_product", product_id, &error, ADD_PRODUCT_FAILED);
        }
    }

    pub async fn remove_product(&self, product_id: ProductId) {
        if let Err(error) = self.remove_product.handle(product_id).await {
            self.report("remove_product", product_id, &error, REMOVE_PRODUCT_FAILED);
        }
    }

    pub async fn update_product_amount(&self, command: UpdateProductAmount) {
        if let Err(error) = self.update_product_amount.handle(command).await {
            self.report(
                "update_product_amount",
                command.product_id,
                &error,
                UPDATE_AMOUNT_FAILED,
            );
        }
    }

    fn report(
        &self,
        operation: &'static str,
        product_id: ProductId,
        error: &CartError,
        failure_message: &'static str,
    ) {
        match error {
            CartError::Domain(DecideError::InvalidAmount(_)) => {
                tracing::debug!(operation, product_id, %error, "ignored invalid input");
            }
            CartError::Domain(DecideError::OutOfStock { .. }) => {
                tracing::info!(operation, product_id, %error, "rejected by stock");
                self.notifier.notify(Notification::error(OUT_OF_STOCK));
            }
            _ => {
                tracing::warn!(operation, product_id, %error, "cart operation failed");
                self.notifier.notify(Notification::error(failure_message));
            }
        }
    }
}

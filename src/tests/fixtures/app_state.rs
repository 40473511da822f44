use crate::modules::cart::adapters::outbound::catalog::in_memory::InMemoryCatalog;
use crate::modules::cart::cart_manager::{CART_STORAGE_KEY, CartManager};
use crate::shared::core::primitives::{Amount, ProductId};
use crate::shared::infrastructure::key_value_storage::in_memory::InMemoryStorage;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::state::AppState;
use crate::tests::fixtures::products::{make_cart, make_product};
use std::sync::Arc;

/// Shell state over in-memory adapters. Product 1 has 5 in stock, product 2 has 1.
pub async fn make_test_state(seed: &[(ProductId, Amount)]) -> AppState {
    let catalog = InMemoryCatalog::new()
        .with_product(make_product(1), 5)
        .with_product(make_product(2), 1);
    let storage = InMemoryStorage::new().with_entry(
        CART_STORAGE_KEY,
        serde_json::to_string(&make_cart(seed)).expect("serialize failed"),
    );
    let notifications = Arc::new(InMemoryNotifier::new());
    let cart = CartManager::new(
        Arc::new(catalog),
        Arc::new(storage),
        notifications.clone(),
        CART_STORAGE_KEY,
    )
    .await;
    AppState {
        cart,
        notifications,
    }
}

// Shared wiring for handler tests: an in-memory storage seeded with a cart,
// and the store loaded from it.

use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::shared::core::primitives::{Amount, ProductId};
use crate::shared::infrastructure::key_value_storage::in_memory::InMemoryStorage;
use crate::tests::fixtures::products::make_cart;
use std::sync::Arc;

pub const KEY: &str = "@RocketShoes:cart";

pub async fn seeded_store(items: &[(ProductId, Amount)]) -> (Arc<InMemoryStorage>, Arc<CartStore>) {
    let snapshot = serde_json::to_string(&make_cart(items)).expect("serialize failed");
    let storage = Arc::new(InMemoryStorage::new().with_entry(KEY, snapshot));
    let store = Arc::new(CartStore::load(storage.clone(), KEY).await);
    (storage, store)
}

use crate::modules::cart::cart_manager::CartManager;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub cart: CartManager,
    pub notifications: Arc<InMemoryNotifier>,
}

// Observable cart state mirrored to durable storage.
//
// Responsibilities
// - Seed the cart from the storage slot once, at construction.
// - Publish every committed cart to subscribers as a new value.
// - Serialize mutations: one transaction at a time holds the write gate from
//   snapshot to commit, so concurrent operations cannot overwrite each other.
//
// Boundaries
// - Readers never wait on the write gate.
// - A storage failure is logged and not retried. The in-memory commit stands.

use crate::modules::cart::core::cart::Cart;
use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use std::sync::Arc;
use tokio::sync::{Mutex, MutexGuard, watch};

pub struct CartStore {
    storage: Arc<dyn KeyValueStorage>,
    key: String,
    state: watch::Sender<Arc<Cart>>,
    write_gate: Mutex<()>,
}

impl CartStore {
    /// Reads the persisted snapshot under `key`. Missing or unparsable
    /// snapshots start an empty cart.
    pub async fn load(storage: Arc<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = match storage.get(&key).await {
            Ok(Some(raw)) => serde_json::from_str::<Cart>(&raw).unwrap_or_else(|e| {
                tracing::warn!(%key, error = %e, "discarding unparsable cart snapshot");
                Cart::new()
            }),
            Ok(None) => Cart::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "cart snapshot could not be read");
                Cart::new()
            }
        };
        tracing::debug!(%key, items = cart.len(), "cart loaded");

        let (state, _) = watch::channel(Arc::new(cart));
        Self {
            storage,
            key,
            state,
            write_gate: Mutex::new(()),
        }
    }

    pub fn current(&self) -> Arc<Cart> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<Cart>> {
        self.state.subscribe()
    }

    /// Waits for the write gate and snapshots the current cart.
    /// Dropping the transaction without committing aborts it.
    pub async fn begin(&self) -> CartTransaction<'_> {
        let gate = self.write_gate.lock().await;
        CartTransaction {
            store: self,
            snapshot: self.current(),
            _gate: gate,
        }
    }

    async fn persist(&self, cart: &Cart) {
        let raw = match serde_json::to_string(cart) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "cart snapshot could not be serialized");
                return;
            }
        };
        if let Err(e) = self.storage.set(&self.key, &raw).await {
            tracing::warn!(key = %self.key, error = %e, "cart snapshot could not be written");
        }
    }
}

pub struct CartTransaction<'a> {
    store: &'a CartStore,
    snapshot: Arc<Cart>,
    _gate: MutexGuard<'a, ()>,
}

impl CartTransaction<'_> {
    pub fn snapshot(&self) -> &Cart {
        &self.snapshot
    }

    /// Publishes `next` as the current cart and writes it to storage.
    pub async fn commit(self, next: Cart) -> Arc<Cart> {
        let next = Arc::new(next);
        self.store.state.send_replace(next.clone());
        self.store.persist(&next).await;
        next
    }
}

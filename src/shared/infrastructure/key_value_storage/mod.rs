// Durable key-value storage port.
//
// Purpose
// - Hold whole-value snapshots under namespaced keys, the way browser local storage does.
//
// Boundaries
// - Values are opaque strings. Callers own serialization.
// - `set` replaces the previous value wholesale.

pub mod file;
pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

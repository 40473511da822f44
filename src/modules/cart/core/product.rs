use crate::shared::core::primitives::ProductId;
use serde::{Deserialize, Serialize};

/// Catalog record as served by the remote lookup service.
///
/// Display fields are carried through untouched; the cart never interprets them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

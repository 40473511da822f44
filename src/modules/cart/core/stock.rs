use crate::shared::core::primitives::{Amount, ProductId};
use serde::{Deserialize, Serialize};

/// Maximum purchasable quantity for a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: Amount,
}

impl Stock {
    pub fn covers(&self, requested: Amount) -> bool {
        self.amount >= requested
    }
}

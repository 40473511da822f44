use crate::shared::core::primitives::{Amount, ProductId};
use serde::Deserialize;

/// Request to set the quantity of a line-item already in the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    pub amount: Amount,
}

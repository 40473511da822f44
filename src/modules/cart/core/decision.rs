use crate::shared::core::primitives::{Amount, ProductId};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("product {0} is not in the cart")]
    NotInCart(ProductId),

    #[error("requested {requested} of product {product_id}, only {available} in stock")]
    OutOfStock {
        product_id: ProductId,
        requested: Amount,
        available: Amount,
    },

    #[error("amount must be positive, got {0}")]
    InvalidAmount(Amount),
}

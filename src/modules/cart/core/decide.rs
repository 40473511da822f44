// Pure decision functions for the cart.
//
// Purpose
// - Validate a requested change against the current cart and the observed stock.
// - Produce the next cart on success. The input cart is never modified.
//
// Boundaries
// - Never perform input or output. Stock is passed in by the caller.
// - `None` stock means the lookup returned no record, in which case there is no cap.

use crate::modules::cart::core::cart::{Cart, CartItem};
use crate::modules::cart::core::decision::DecideError;
use crate::modules::cart::core::product::Product;
use crate::modules::cart::core::stock::Stock;
use crate::shared::core::primitives::{Amount, ProductId};

fn ensure_in_stock(
    product_id: ProductId,
    requested: Amount,
    stock: Option<&Stock>,
) -> Result<(), DecideError> {
    match stock {
        Some(stock) if !stock.covers(requested) => Err(DecideError::OutOfStock {
            product_id,
            requested,
            available: stock.amount,
        }),
        _ => Ok(()),
    }
}

/// Adds one unit of `product`, appending a new line-item when it is not in the cart yet.
pub fn decide_add(cart: &Cart, product: Product, stock: Option<&Stock>) -> Result<Cart, DecideError> {
    let product_id = product.id;
    let current = cart.amount_of(product_id);
    let target_amount = current.checked_add(1).ok_or(DecideError::OutOfStock {
        product_id,
        requested: Amount::MAX,
        available: current,
    })?;
    ensure_in_stock(product_id, target_amount, stock)?;

    if cart.contains(product_id) {
        Ok(cart.with_amount(product_id, target_amount))
    } else {
        Ok(cart.with_item(CartItem::new(product, target_amount)))
    }
}

pub fn decide_remove(cart: &Cart, product_id: ProductId) -> Result<Cart, DecideError> {
    cart.without(product_id)
        .ok_or(DecideError::NotInCart(product_id))
}

pub fn ensure_valid_amount(amount: Amount) -> Result<(), DecideError> {
    if amount <= 0 {
        return Err(DecideError::InvalidAmount(amount));
    }
    Ok(())
}

pub fn ensure_in_cart(cart: &Cart, product_id: ProductId) -> Result<(), DecideError> {
    if !cart.contains(product_id) {
        return Err(DecideError::NotInCart(product_id));
    }
    Ok(())
}

pub fn decide_update_amount(
    cart: &Cart,
    product_id: ProductId,
    amount: Amount,
    stock: Option<&Stock>,
) -> Result<Cart, DecideError> {
    ensure_valid_amount(amount)?;
    ensure_in_cart(cart, product_id)?;
    ensure_in_stock(product_id, amount, stock)?;
    Ok(cart.with_amount(product_id, amount))
}

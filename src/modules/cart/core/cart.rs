// Cart value type.
//
// Purpose
// - Ordered list of line-items, unique by product id. New products append to the end.
//
// Boundaries
// - Values are immutable from the outside. Every change produces a new Cart.
// - No input or output here.

use crate::modules::cart::core::product::Product;
use crate::shared::core::primitives::{Amount, ProductId};
use serde::{Deserialize, Serialize};

/// A product held in the cart together with the requested quantity.
///
/// Serialized flat, so a stored line-item reads `{ id, title, price, image, amount }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: Amount,
}

impl CartItem {
    pub fn new(product: Product, amount: Amount) -> Self {
        Self { product, amount }
    }

    pub fn id(&self) -> ProductId {
        self.product.id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    /// Quantity held for `product_id`, zero when it is not in the cart.
    pub fn amount_of(&self, product_id: ProductId) -> Amount {
        self.find(product_id).map_or(0, |item| item.amount)
    }

    /// Copy of this cart with the line-item for `product_id` set to `amount`.
    /// Position is kept. Unknown ids leave the copy unchanged.
    pub fn with_amount(&self, product_id: ProductId, amount: Amount) -> Cart {
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id() == product_id {
                    CartItem {
                        amount,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();
        Cart { items }
    }

    /// Copy of this cart with `item` appended, replacing any line-item with the same id.
    pub fn with_item(&self, item: CartItem) -> Cart {
        if self.contains(item.id()) {
            return self.with_amount(item.id(), item.amount);
        }
        let mut items = self.items.clone();
        items.push(item);
        Cart { items }
    }

    /// Copy of this cart without `product_id`, or `None` when it is not in the cart.
    pub fn without(&self, product_id: ProductId) -> Option<Cart> {
        let index = self.items.iter().position(|item| item.id() == product_id)?;
        let mut items = self.items.clone();
        items.remove(index);
        Some(Cart { items })
    }
}

/// Line-items with a non-positive amount are dropped. Repeated ids collapse onto
/// the first position with the last amount.
impl From<Vec<CartItem>> for Cart {
    fn from(items: Vec<CartItem>) -> Self {
        items.into_iter().fold(Cart::new(), |cart, item| {
            if item.amount <= 0 {
                tracing::warn!(
                    product_id = item.id(),
                    amount = item.amount,
                    "discarding line-item with a non-positive amount"
                );
                return cart;
            }
            cart.with_item(item)
        })
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

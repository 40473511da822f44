// Shared test fixtures for catalog products and cart line-items.

use crate::modules::cart::core::cart::{Cart, CartItem};
use crate::modules::cart::core::product::Product;
use crate::modules::cart::core::stock::Stock;
use crate::shared::core::primitives::{Amount, ProductId};

pub struct ProductBuilder {
    inner: Product,
}

#[allow(dead_code)]
impl ProductBuilder {
    pub fn new(id: ProductId) -> Self {
        Self {
            inner: Product {
                id,
                title: format!("Tênis de Caminhada Leve Confortável #{id}"),
                price: 179.9,
                image: format!("https://storefront.test/images/{id}.jpg"),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn price(mut self, v: f64) -> Self {
        self.inner.price = v;
        self
    }

    pub fn image(mut self, v: impl Into<String>) -> Self {
        self.inner.image = v.into();
        self
    }

    pub fn build(self) -> Product {
        self.inner
    }
}

pub fn make_product(id: ProductId) -> Product {
    ProductBuilder::new(id).build()
}

pub fn make_stock(id: ProductId, amount: Amount) -> Stock {
    Stock { id, amount }
}

pub fn make_cart_item(id: ProductId, amount: Amount) -> CartItem {
    CartItem::new(make_product(id), amount)
}

pub fn make_cart(items: &[(ProductId, Amount)]) -> Cart {
    items
        .iter()
        .fold(Cart::new(), |cart, &(id, amount)| {
            cart.with_item(make_cart_item(id, amount))
        })
}

#[cfg(test)]
mod product_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let product = ProductBuilder::new(7)
            .title("Sandália")
            .price(59.9)
            .image("https://img/7.png")
            .build();

        assert_eq!(product.id, 7);
        assert_eq!(product.title, "Sandália");
        assert_eq!(product.price, 59.9);
        assert_eq!(product.image, "https://img/7.png");
    }
}

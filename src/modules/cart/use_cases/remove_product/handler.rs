use crate::modules::cart::adapters::outbound::cart_store::CartStore;
use crate::modules::cart::core::decide::decide_remove;
use crate::modules::cart::use_cases::errors::CartError;
use crate::shared::core::primitives::ProductId;
use std::sync::Arc;

pub struct RemoveProductHandler {
    store: Arc<CartStore>,
}

impl RemoveProductHandler {
    pub fn new(store: Arc<CartStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, product_id: ProductId) -> Result<(), CartError> {
        let transaction = self.store.begin().await;
        let next = decide_remove(transaction.snapshot(), product_id)?;
        transaction.commit(next).await;
        tracing::debug!(product_id, "product removed");
        Ok(())
    }
}

#[cfg(test)]
mod remove_product_handler_tests {
    use super::*;
    use crate::modules::cart::core::decision::DecideError;
    use crate::tests::fixtures::catalog::seeded_store;
    use crate::tests::fixtures::products::make_cart;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn handle_remove_drops_the_line_item() {
        let (storage, store) = seeded_store(&[(1, 2), (2, 1)]).await;
        let handler = RemoveProductHandler::new(store.clone());

        handler.handle(1).await.expect("handle failed");

        assert_eq!(*store.current(), make_cart(&[(2, 1)]));
        assert_eq!(storage.writes(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn handle_remove_fails_for_a_product_not_in_the_cart() {
        let (storage, store) = seeded_store(&[]).await;
        let handler = RemoveProductHandler::new(store.clone());

        let result = handler.handle(99).await;

        assert!(matches!(
            result,
            Err(CartError::Domain(DecideError::NotInCart(99)))
        ));
        assert!(store.current().is_empty());
        assert_eq!(storage.writes(), 0);
    }
}

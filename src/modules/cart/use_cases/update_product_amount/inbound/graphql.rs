use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::modules::cart::use_cases::view_cart::inbound::graphql::{GqlCartItem, to_gql_cart};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateProductAmountMutation;

#[Object]
impl UpdateProductAmountMutation {
    async fn update_product_amount(
        &self,
        context: &Context<'_>,
        product_id: u64,
        amount: i64,
    ) -> GqlResult<Vec<GqlCartItem>> {
        let state = context.data_unchecked::<AppState>();
        state
            .cart
            .update_product_amount(UpdateProductAmount { product_id, amount })
            .await;
        Ok(to_gql_cart(&state.cart.cart()))
    }
}

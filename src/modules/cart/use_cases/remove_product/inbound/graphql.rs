use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::use_cases::view_cart::inbound::graphql::{GqlCartItem, to_gql_cart};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RemoveProductMutation;

#[Object]
impl RemoveProductMutation {
    async fn remove_product(
        &self,
        context: &Context<'_>,
        product_id: u64,
    ) -> GqlResult<Vec<GqlCartItem>> {
        let state = context.data_unchecked::<AppState>();
        state.cart.remove_product(product_id).await;
        Ok(to_gql_cart(&state.cart.cart()))
    }
}

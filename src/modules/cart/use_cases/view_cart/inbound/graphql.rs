use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::cart::core::cart::{Cart, CartItem};
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCartItem {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: i64,
}

impl From<&CartItem> for GqlCartItem {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.product.id,
            title: item.product.title.clone(),
            price: item.product.price,
            image: item.product.image.clone(),
            amount: item.amount,
        }
    }
}

pub fn to_gql_cart(cart: &Cart) -> Vec<GqlCartItem> {
    cart.items().iter().map(GqlCartItem::from).collect()
}

#[derive(Default)]
pub struct ViewCartQuery;

#[Object]
impl ViewCartQuery {
    async fn cart(&self, context: &Context<'_>) -> GqlResult<Vec<GqlCartItem>> {
        let state = context.data_unchecked::<AppState>();
        Ok(to_gql_cart(&state.cart.cart()))
    }
}

use axum::{
    Json,
    extract::{Path, State},
};

use crate::modules::cart::core::cart::Cart;
use crate::shared::core::primitives::ProductId;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Json<Cart> {
    state.cart.add_product(product_id).await;
    Json(state.cart.cart().as_ref().clone())
}

use axum::{Json, extract::State};

use crate::modules::cart::core::cart::Cart;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Json<Cart> {
    Json(state.cart.cart().as_ref().clone())
}

use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::cart::use_cases::add_product::inbound::http as add_http;
use crate::modules::cart::use_cases::drain_notifications::inbound::http as notifications_http;
use crate::modules::cart::use_cases::remove_product::inbound::http as remove_http;
use crate::modules::cart::use_cases::update_product_amount::inbound::http as update_http;
use crate::modules::cart::use_cases::view_cart::inbound::http as view_http;
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route("/cart", get(view_http::handle))
        .route(
            "/cart/products/{product_id}",
            post(add_http::handle).delete(remove_http::handle),
        )
        .route("/cart/products/{product_id}/amount", put(update_http::handle))
        .route("/notifications/drain", post(notifications_http::handle))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

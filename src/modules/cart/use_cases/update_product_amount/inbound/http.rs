use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::cart::use_cases::update_product_amount::command::UpdateProductAmount;
use crate::shared::core::primitives::{Amount, ProductId};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateProductAmountBody {
    pub amount: Amount,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(product_id): Path<ProductId>,
    body: Result<Json<UpdateProductAmountBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    state
        .cart
        .update_product_amount(UpdateProductAmount {
            product_id,
            amount: body.amount,
        })
        .await;
    Json(state.cart.cart().as_ref().clone()).into_response()
}

#[cfg(test)]
mod update_product_amount_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::cart::cart_manager::OUT_OF_STOCK;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_state;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/cart/products/{product_id}/amount", put(handle))
            .with_state(state)
    }

    fn request(product_id: u64, body: &'static str) -> Request<Body> {
        Request::put(format!("/cart/products/{product_id}/amount"))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_updated_amount() {
        let response = app(make_test_state(&[(1, 1)]).await)
            .oneshot(request(1, r#"{"amount":3}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["amount"], 3);
    }

    #[tokio::test]
    async fn it_should_notify_out_of_stock_and_keep_the_amount() {
        let state = make_test_state(&[(1, 1)]).await;
        let notifications = state.notifications.clone();

        let response = app(state)
            .oneshot(request(1, r#"{"amount":50}"#))
            .await
            .unwrap();

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json[0]["amount"], 1);
        assert_eq!(notifications.notifications()[0].message, OUT_OF_STOCK);
    }

    #[tokio::test]
    async fn it_should_return_422_on_invalid_json() {
        let response = app(make_test_state(&[(1, 1)]).await)
            .oneshot(request(1, "not-json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}

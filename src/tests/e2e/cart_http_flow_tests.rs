// End to end flow through the HTTP router with file backed storage.
//
// - Mutate the cart over HTTP.
// - Reopen the storage file with a fresh manager and expect the same cart.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::modules::cart::adapters::outbound::catalog::in_memory::InMemoryCatalog;
use crate::modules::cart::cart_manager::{CART_STORAGE_KEY, CartManager, OUT_OF_STOCK};
use crate::shared::infrastructure::key_value_storage::file::FileStorage;
use crate::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::products::make_product;

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_product(make_product(1), 3)
        .with_product(make_product(2), 10)
}

async fn make_state(path: &Path) -> AppState {
    let notifications = Arc::new(InMemoryNotifier::new());
    let cart = CartManager::new(
        Arc::new(catalog()),
        Arc::new(FileStorage::new(path)),
        notifications.clone(),
        CART_STORAGE_KEY,
    )
    .await;
    AppState {
        cart,
        notifications,
    }
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn post(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

#[fixture]
fn before_each() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir failed");
    let path = dir.path().join("cart-storage.json");
    (dir, path)
}

#[rstest]
#[tokio::test]
async fn it_should_persist_the_cart_across_sessions(before_each: (TempDir, PathBuf)) {
    let (_dir, path) = before_each;
    let app = router(make_state(&path).await);

    call(&app, post("/cart/products/1")).await;
    call(&app, post("/cart/products/2")).await;
    call(&app, post("/cart/products/1")).await;
    call(
        &app,
        Request::put("/cart/products/2/amount")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"amount":7}"#))
            .unwrap(),
    )
    .await;
    let (status, body) = call(
        &app,
        Request::delete("/cart/products/1")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["id"], 2);
    assert_eq!(body[0]["amount"], 7);

    let reopened = router(make_state(&path).await);
    let (_, cart) = call(&reopened, Request::get("/cart").body(Body::empty()).unwrap()).await;
    assert_eq!(cart, body);
}

#[rstest]
#[tokio::test]
async fn it_should_surface_stock_shortfalls_through_the_notification_feed(
    before_each: (TempDir, PathBuf),
) {
    let (_dir, path) = before_each;
    let app = router(make_state(&path).await);

    for _ in 0..4 {
        call(&app, post("/cart/products/1")).await;
    }
    let (_, cart) = call(&app, Request::get("/cart").body(Body::empty()).unwrap()).await;
    let (_, notifications) = call(&app, post("/notifications/drain")).await;
    let (_, drained_again) = call(&app, post("/notifications/drain")).await;

    assert_eq!(cart[0]["amount"], 3);
    assert_eq!(
        notifications,
        serde_json::json!([{ "severity": "error", "message": OUT_OF_STOCK }])
    );
    assert_eq!(drained_again, serde_json::json!([]));
}

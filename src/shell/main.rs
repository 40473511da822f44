use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use storefront_cart::modules::cart::adapters::outbound::catalog::http::HttpCatalog;
use storefront_cart::modules::cart::cart_manager::CartManager;
use storefront_cart::shared::infrastructure::key_value_storage::file::FileStorage;
use storefront_cart::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use storefront_cart::shell::config::AppConfig;
use storefront_cart::shell::http::router;
use storefront_cart::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;

    let catalog = Arc::new(HttpCatalog::new(config.catalog_url.clone())?);
    let storage = Arc::new(FileStorage::new(config.storage_path.clone()));
    tracing::info!(path = %storage.path().display(), "cart storage");
    let notifications = Arc::new(InMemoryNotifier::new());

    let cart = CartManager::new(catalog, storage, notifications.clone(), config.storage_key.clone()).await;
    tracing::info!(items = cart.cart().len(), "cart ready");

    let app = router(AppState {
        cart,
        notifications,
    });

    tracing::info!("Cart API: http://{}/cart", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

// Service configuration loaded from environment variables.
//
// Variables (all optional)
// - CART_BIND_ADDR     listen address           (default 0.0.0.0:8080)
// - CART_CATALOG_URL   product/stock service    (default http://localhost:3333)
// - CART_STORAGE_PATH  cart storage file        (default ./cart-storage.json)
// - CART_STORAGE_KEY   storage slot for the cart (default @RocketShoes:cart)

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

use crate::modules::cart::cart_manager::CART_STORAGE_KEY;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_CATALOG_URL: &str = "http://localhost:3333";
const DEFAULT_STORAGE_PATH: &str = "./cart-storage.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub catalog_url: String,
    pub storage_path: PathBuf,
    pub storage_key: String,
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_addr = get_or_default("CART_BIND_ADDR", DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CART_BIND_ADDR".to_string(), e.to_string()))?;

        let catalog_url = get_or_default("CART_CATALOG_URL", DEFAULT_CATALOG_URL);
        if !(catalog_url.starts_with("http://") || catalog_url.starts_with("https://")) {
            return Err(ConfigError::InvalidEnvVar(
                "CART_CATALOG_URL".to_string(),
                format!("expected an http(s) URL, got {catalog_url}"),
            ));
        }

        let storage_key = get_or_default("CART_STORAGE_KEY", CART_STORAGE_KEY);
        if storage_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                "CART_STORAGE_KEY".to_string(),
                "must not be empty".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            catalog_url,
            storage_path: PathBuf::from(get_or_default("CART_STORAGE_PATH", DEFAULT_STORAGE_PATH)),
            storage_key,
        })
    }
}

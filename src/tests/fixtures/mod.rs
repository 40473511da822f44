pub mod app_state;
pub mod catalog;
pub mod products;

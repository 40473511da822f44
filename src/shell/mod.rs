// Composition root for the cart service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate concrete adapters and wire them into the CartManager.
// - Expose the manager over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

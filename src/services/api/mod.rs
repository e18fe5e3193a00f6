//! HTTP surface of the block gateway.
//!
//! Exposes the query service over REST:
//! - Route handlers translating HTTP requests into query operations
//! - Server assembly with middleware and bind-address handling

pub mod handlers;

mod server;

pub use server::{configure_routes, create_api_server};

//! A REST gateway serving block and transaction queries over a durable
//! block collection.
//!
//! The crate is organized around a small set of layers:
//!
//! - `models`: Typed views over the stored block documents
//! - `services::store`: Document store interface and backends
//! - `services::query`: Read and write query operations
//! - `services::api`: actix-web HTTP surface
//! - `bootstrap`: Startup wiring shared by the binary and the tests
//! - `utils`: Logging setup and shared constants

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;

//! Core services implementing the block gateway's functionality.
//!
//! Contains the service layer of the application:
//! - `api`: HTTP surface exposing the query operations
//! - `query`: block query orchestration over the document store
//! - `store`: document store interface and backends

pub mod api;
pub mod query;
pub mod store;

//! Block query service.
//!
//! The read/write core of the gateway: typed operations over the block
//! collection, implemented against the generic document store interface.

mod error;
mod service;

pub use error::QueryError;
pub use service::BlockQueryService;

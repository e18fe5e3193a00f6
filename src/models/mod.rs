//! Domain models for the block gateway.
//!
//! This module contains the data structures served by the gateway:
//!
//! - `block`: a chain block record with its embedded transaction sequence
//! - `transaction`: a record embedded within exactly one block

mod block;
mod transaction;

pub use block::Block;
pub use transaction::Transaction;

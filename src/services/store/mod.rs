//! Document store interfaces and implementations.
//!
//! Provides the storage collaborator the query service runs against:
//! - Generic document store trait with filter, pagination and sort support
//! - In-memory backend for tests and ephemeral runs
//! - File backend persisting the collection as a JSON document array

mod error;
mod file;
mod filter;
mod memory;
mod traits;

pub use error::StoreError;
pub use file::FileStore;
pub use filter::{Condition, Document, DocumentId, Filter, FindOptions, SortOrder, ID_FIELD};
pub use memory::MemoryStore;
pub use traits::DocumentStore;

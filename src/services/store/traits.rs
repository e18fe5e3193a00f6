//! Core document store interface.
//!
//! Query services depend on this trait rather than a concrete backend, so
//! tests can substitute mocks and the binary can pick a backend at startup.

use async_trait::async_trait;

use super::{Document, DocumentId, Filter, FindOptions, StoreError};

/// Generic capability set over a single document collection.
///
/// All scans honor insertion order: when several documents satisfy a filter,
/// the single-document operations act on the first match.
#[async_trait]
pub trait DocumentStore: Send + Sync {
	/// Returns the first document matching the filter, if any.
	async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError>;

	/// Returns every matching document, after applying sort, skip and limit
	/// in that order.
	async fn find(
		&self,
		filter: &Filter,
		options: &FindOptions,
	) -> Result<Vec<Document>, StoreError>;

	/// Appends a document, assigning it a fresh identifier under `_id`.
	async fn insert_one(&self, document: Document) -> Result<DocumentId, StoreError>;

	/// Merges `set` field-by-field into the first matching document and
	/// returns the post-update state. The `_id` field is never modified.
	async fn find_one_and_update(
		&self,
		filter: &Filter,
		set: &Document,
	) -> Result<Option<Document>, StoreError>;

	/// Removes the first matching document, returning how many were removed
	/// (zero or one).
	async fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError>;
}

//! Mock implementations and shared fixtures.
//!
//! This module provides a mock implementation of the document store interface
//! used for testing. It includes:
//! - [`MockDocumentStore`] - Mock implementation of the document store
//! - Helper constructors for the block documents used across the tests
//!
//! The mock allows testing store-dependent functionality without a real
//! backend.

use async_trait::async_trait;
use mockall::mock;
use serde_json::{json, Value};

use block_gateway::services::store::{
	Document, DocumentId, DocumentStore, Filter, FindOptions, StoreError,
};

mock! {
	pub DocumentStore {}

	#[async_trait]
	impl DocumentStore for DocumentStore {
		async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError>;
		async fn find(
			&self,
			filter: &Filter,
			options: &FindOptions,
		) -> Result<Vec<Document>, StoreError>;
		async fn insert_one(&self, document: Document) -> Result<DocumentId, StoreError>;
		async fn find_one_and_update(
			&self,
			filter: &Filter,
			set: &Document,
		) -> Result<Option<Document>, StoreError>;
		async fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError>;
	}
}

/// Document built from a JSON object literal.
pub fn doc(value: Value) -> Document {
	value
		.as_object()
		.cloned()
		.expect("test document must be a JSON object")
}

/// Minimal block document with the given height and hash.
pub fn block_document(height: u64, hash: &str) -> Document {
	doc(json!({ "height": height, "hash": hash }))
}

/// Block document embedding the given transaction array.
pub fn block_with_transactions(height: u64, hash: &str, tx: Value) -> Document {
	doc(json!({ "height": height, "hash": hash, "tx": tx }))
}

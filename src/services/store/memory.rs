//! In-memory document store backend.
//!
//! Keeps the collection as a vector behind a read-write lock. Insertion
//! order is the collection's native order, which makes single-document
//! operations against duplicated keys deterministic.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::filter::compare_values;
use super::{Document, DocumentId, DocumentStore, Filter, FindOptions, SortOrder, StoreError, ID_FIELD};

/// Shared in-memory collection. Clones share the same underlying documents.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	documents: Arc<RwLock<Vec<Document>>>,
}

impl MemoryStore {
	/// Creates an empty collection.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a collection seeded with the given documents, keeping their
	/// order.
	pub fn with_documents(documents: Vec<Document>) -> Self {
		Self {
			documents: Arc::new(RwLock::new(documents)),
		}
	}

	/// Snapshot of the whole collection in insertion order.
	pub async fn documents(&self) -> Vec<Document> {
		self.documents.read().await.clone()
	}
}

#[async_trait]
impl DocumentStore for MemoryStore {
	async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError> {
		let documents = self.documents.read().await;
		Ok(documents.iter().find(|doc| filter.matches(doc)).cloned())
	}

	async fn find(
		&self,
		filter: &Filter,
		options: &FindOptions,
	) -> Result<Vec<Document>, StoreError> {
		let documents = self.documents.read().await;
		let mut matched: Vec<Document> = documents
			.iter()
			.filter(|doc| filter.matches(doc))
			.cloned()
			.collect();
		drop(documents);

		if let Some((field, order)) = &options.sort {
			matched.sort_by(|a, b| {
				let ordering = compare_values(a.get(field), b.get(field));
				match order {
					SortOrder::Ascending => ordering,
					SortOrder::Descending => ordering.reverse(),
				}
			});
		}

		let skipped = matched.into_iter().skip(options.skip.unwrap_or(0) as usize);
		Ok(match options.limit {
			Some(limit) => skipped.take(limit as usize).collect(),
			None => skipped.collect(),
		})
	}

	async fn insert_one(&self, mut document: Document) -> Result<DocumentId, StoreError> {
		let id = DocumentId::generate();
		document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
		self.documents.write().await.push(document);
		Ok(id)
	}

	async fn find_one_and_update(
		&self,
		filter: &Filter,
		set: &Document,
	) -> Result<Option<Document>, StoreError> {
		let mut documents = self.documents.write().await;
		let Some(target) = documents.iter_mut().find(|doc| filter.matches(doc)) else {
			return Ok(None);
		};
		for (field, value) in set {
			if field == ID_FIELD {
				continue;
			}
			target.insert(field.clone(), value.clone());
		}
		Ok(Some(target.clone()))
	}

	async fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError> {
		let mut documents = self.documents.write().await;
		match documents.iter().position(|doc| filter.matches(doc)) {
			Some(index) => {
				documents.remove(index);
				Ok(1)
			}
			None => Ok(0),
		}
	}
}

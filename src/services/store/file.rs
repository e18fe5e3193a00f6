//! File-backed document store.
//!
//! Wraps [`MemoryStore`] and flushes the whole collection to a JSON file
//! after every mutation. Mutations serialize through a flush lock so the
//! file on disk always reflects the latest completed write.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{Document, DocumentId, DocumentStore, Filter, FindOptions, MemoryStore, StoreError};

/// Durable JSON-file collection. Clones share the same documents and the
/// same flush lock.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
	inner: MemoryStore,
	flush_lock: Arc<Mutex<()>>,
}

impl FileStore {
	/// Loads the collection stored at `path`, creating parent directories as
	/// needed. A missing or empty file starts an empty collection.
	pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
		let path = path.into();
		if let Some(parent) = path.parent() {
			if !parent.as_os_str().is_empty() {
				tokio::fs::create_dir_all(parent).await?;
			}
		}

		let documents = match tokio::fs::read_to_string(&path).await {
			Ok(content) if content.trim().is_empty() => Vec::new(),
			Ok(content) => serde_json::from_str::<Vec<Document>>(&content)?,
			Err(error) if error.kind() == ErrorKind::NotFound => Vec::new(),
			Err(error) => return Err(error.into()),
		};

		Ok(Self {
			path,
			inner: MemoryStore::with_documents(documents),
			flush_lock: Arc::new(Mutex::new(())),
		})
	}

	/// Path of the backing file.
	pub fn path(&self) -> &std::path::Path {
		&self.path
	}

	/// Writes the current collection to disk. A failed flush leaves the
	/// in-memory state ahead of the file; a restart falls back to the last
	/// flushed state.
	async fn flush(&self) -> Result<(), StoreError> {
		let documents = self.inner.documents().await;
		let json = serde_json::to_string_pretty(&documents)?;
		tokio::fs::write(&self.path, json).await?;
		Ok(())
	}
}

#[async_trait]
impl DocumentStore for FileStore {
	async fn find_one(&self, filter: &Filter) -> Result<Option<Document>, StoreError> {
		self.inner.find_one(filter).await
	}

	async fn find(
		&self,
		filter: &Filter,
		options: &FindOptions,
	) -> Result<Vec<Document>, StoreError> {
		self.inner.find(filter, options).await
	}

	async fn insert_one(&self, document: Document) -> Result<DocumentId, StoreError> {
		let _guard = self.flush_lock.lock().await;
		let id = self.inner.insert_one(document).await?;
		self.flush().await?;
		Ok(id)
	}

	async fn find_one_and_update(
		&self,
		filter: &Filter,
		set: &Document,
	) -> Result<Option<Document>, StoreError> {
		let _guard = self.flush_lock.lock().await;
		let updated = self.inner.find_one_and_update(filter, set).await?;
		if updated.is_some() {
			self.flush().await?;
		}
		Ok(updated)
	}

	async fn delete_one(&self, filter: &Filter) -> Result<u64, StoreError> {
		let _guard = self.flush_lock.lock().await;
		let removed = self.inner.delete_one(filter).await?;
		if removed > 0 {
			self.flush().await?;
		}
		Ok(removed)
	}
}

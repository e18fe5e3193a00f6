//! Bootstrap module for initializing the store and the query service.
//!
//! This module wires the durable document store to the block query service
//! so the binary and the tests share one startup path.
//!
//! # Services
//! - `FileStore`: JSON-file document store holding the block collection
//! - `BlockQueryService`: read/write query operations over that store

use std::{error::Error, path::PathBuf, sync::Arc};

use tracing::info;

use crate::{
	services::query::BlockQueryService,
	services::store::FileStore,
	utils::constants::DEFAULT_DATA_FILE,
};

/// Type alias for handling ServiceResult
pub type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Initializes the file-backed store and the query service around it.
///
/// The collection is loaded from `data_file`, falling back to the default
/// data file. A missing file starts an empty collection.
///
/// # Errors
/// Returns an error if the data file exists but cannot be read or parsed.
pub async fn initialize_services(
	data_file: Option<PathBuf>,
) -> Result<Arc<BlockQueryService<FileStore>>> {
	let path = data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
	info!("Loading block collection from {}", path.display());

	let store = FileStore::load(path).await?;
	Ok(Arc::new(BlockQueryService::new(store)))
}

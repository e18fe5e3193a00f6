//! Block query orchestration.
//!
//! Translates query intents into document store operations and decodes the
//! results into typed models. The service owns no state beyond the injected
//! store handle and performs no retries: every store outcome, success or
//! failure, is final for the request.

use crate::models::{Block, Transaction};
use crate::services::store::{Document, DocumentStore, Filter, FindOptions, SortOrder, ID_FIELD};

use super::error::QueryError;

const BLOCK_NOT_FOUND: &str = "Block not found";
const NO_BLOCKS_FOUND: &str = "No blocks found";
const TRANSACTION_NOT_FOUND: &str = "Transaction not found in block";
const EMPTY_PAYLOAD: &str = "Invalid request. No JSON data provided.";

/// Read and write operations over the block collection, generic over the
/// backing [`DocumentStore`].
#[derive(Debug)]
pub struct BlockQueryService<S> {
	store: S,
}

impl<S: DocumentStore> BlockQueryService<S> {
	/// Creates a service around the given store handle.
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// Returns the first block at the given height.
	pub async fn block_by_height(&self, height: u64) -> Result<Block, QueryError> {
		let document = self
			.store
			.find_one(&Filter::eq("height", height))
			.await?
			.ok_or_else(|| QueryError::not_found(BLOCK_NOT_FOUND))?;
		Ok(Block::from_document(document)?)
	}

	/// Returns one page of blocks in store order.
	///
	/// Non-positive `page` and `per_page` values are clamped to 1, so page 0
	/// serves the same window as page 1. Pages past the end of the
	/// collection are empty, not an error.
	pub async fn list_blocks(&self, page: u64, per_page: u64) -> Result<Vec<Block>, QueryError> {
		let page = page.max(1);
		let per_page = per_page.max(1);
		let options = FindOptions {
			skip: Some((page - 1).saturating_mul(per_page)),
			limit: Some(per_page),
			sort: None,
		};
		let documents = self.store.find(&Filter::all(), &options).await?;
		Ok(decode_blocks(documents)?)
	}

	/// Returns every block with `start <= height <= end`, in store order.
	///
	/// The result size is unbounded; an inverted range is empty.
	pub async fn blocks_in_range(&self, start: u64, end: u64) -> Result<Vec<Block>, QueryError> {
		let documents = self
			.store
			.find(&Filter::between("height", start, end), &FindOptions::default())
			.await?;
		Ok(decode_blocks(documents)?)
	}

	/// Returns the block with the given hash.
	pub async fn block_by_hash(&self, hash: &str) -> Result<Block, QueryError> {
		let document = self
			.store
			.find_one(&Filter::eq("hash", hash))
			.await?
			.ok_or_else(|| QueryError::not_found(BLOCK_NOT_FOUND))?;
		Ok(Block::from_document(document)?)
	}

	/// Persists a block document exactly as supplied and returns the
	/// store-assigned identifier.
	///
	/// An empty document is rejected before the store is contacted. No field
	/// validation or uniqueness check is applied beyond that; any
	/// caller-supplied `_id` is dropped in favor of the store's own.
	pub async fn insert_block(&self, mut document: Document) -> Result<String, QueryError> {
		if document.is_empty() {
			return Err(QueryError::invalid_input(EMPTY_PAYLOAD));
		}
		document.remove(ID_FIELD);
		let id = self.store.insert_one(document).await?;
		Ok(id.to_string())
	}

	/// Merges the patch into the first block at the given height and returns
	/// the post-update state.
	///
	/// An empty patch is rejected before the store is contacted; `_id` is
	/// stripped from the patch so the stored identity survives any update.
	pub async fn update_block(&self, height: u64, mut patch: Document) -> Result<Block, QueryError> {
		if patch.is_empty() {
			return Err(QueryError::invalid_input(EMPTY_PAYLOAD));
		}
		patch.remove(ID_FIELD);
		let document = self
			.store
			.find_one_and_update(&Filter::eq("height", height), &patch)
			.await?
			.ok_or_else(|| QueryError::not_found(BLOCK_NOT_FOUND))?;
		Ok(Block::from_document(document)?)
	}

	/// Deletes the first block at the given height, returning how many
	/// documents were removed.
	pub async fn delete_block(&self, height: u64) -> Result<u64, QueryError> {
		let removed = self.store.delete_one(&Filter::eq("height", height)).await?;
		if removed == 0 {
			return Err(QueryError::not_found(BLOCK_NOT_FOUND));
		}
		Ok(removed)
	}

	/// Returns the block with the greatest height.
	pub async fn latest_block(&self) -> Result<Block, QueryError> {
		let options = FindOptions {
			skip: None,
			limit: Some(1),
			sort: Some(("height".into(), SortOrder::Descending)),
		};
		let mut documents = self.store.find(&Filter::all(), &options).await?;
		if documents.is_empty() {
			return Err(QueryError::not_found(NO_BLOCKS_FOUND));
		}
		Ok(Block::from_document(documents.remove(0))?)
	}

	/// Returns the transaction with the given hash from whichever block
	/// embeds it.
	///
	/// The store narrows to a candidate block via `tx.hash`; a scan over that
	/// block's transactions extracts the exact element. The two misses are
	/// reported apart: no candidate block, or a candidate whose scan comes up
	/// empty. Embedded records without a hash are skipped by the scan.
	pub async fn transaction_by_hash(&self, tx_hash: &str) -> Result<Transaction, QueryError> {
		let document = self
			.store
			.find_one(&Filter::eq("tx.hash", tx_hash))
			.await?
			.ok_or_else(|| QueryError::not_found(BLOCK_NOT_FOUND))?;
		let block = Block::from_document(document)?;
		block
			.transactions()
			.iter()
			.find(|tx| tx.matches_hash(tx_hash))
			.cloned()
			.ok_or_else(|| QueryError::not_found(TRANSACTION_NOT_FOUND))
	}

	/// Returns every transaction of the block at the given height, in stored
	/// order. A block without a `tx` field has no transactions.
	pub async fn transactions_in_block(&self, height: u64) -> Result<Vec<Transaction>, QueryError> {
		let document = self
			.store
			.find_one(&Filter::eq("height", height))
			.await?
			.ok_or_else(|| QueryError::not_found(BLOCK_NOT_FOUND))?;
		let block = Block::from_document(document)?;
		Ok(block.transactions().to_vec())
	}
}

fn decode_blocks(documents: Vec<Document>) -> Result<Vec<Block>, serde_json::Error> {
	documents.into_iter().map(Block::from_document).collect()
}

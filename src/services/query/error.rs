//! Error types for block query operations.

use thiserror::Error;

use crate::services::store::StoreError;

/// Errors returned by [`BlockQueryService`](super::BlockQueryService)
/// operations.
///
/// `NotFound` and `InvalidInput` carry the exact user-facing reason; store
/// failures keep the backend's own detail rather than a generic message.
#[derive(Debug, Error)]
pub enum QueryError {
	/// The requested block or transaction does not exist.
	#[error("{0}")]
	NotFound(String),

	/// The request carried no usable payload.
	#[error("{0}")]
	InvalidInput(String),

	/// The store reported a failure.
	#[error(transparent)]
	Store(#[from] StoreError),

	/// A stored document no longer decodes into the block model.
	#[error("malformed document: {0}")]
	Malformed(#[from] serde_json::Error),
}

impl QueryError {
	pub fn not_found(reason: impl Into<String>) -> Self {
		Self::NotFound(reason.into())
	}

	pub fn invalid_input(reason: impl Into<String>) -> Self {
		Self::InvalidInput(reason.into())
	}

	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound(_))
	}

	pub fn is_invalid_input(&self) -> bool {
		matches!(self, Self::InvalidInput(_))
	}
}

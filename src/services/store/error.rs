//! Error types for document store operations.

use thiserror::Error;

/// Errors surfaced by document store backends.
///
/// Store failures carry their own detail so callers can report what the
/// backend said instead of a generic failure.
#[derive(Debug, Error)]
pub enum StoreError {
	/// The backing persistence failed, typically I/O on the data file.
	#[error("persistence error: {0}")]
	Persistence(String),

	/// A document could not be encoded to or decoded from its stored form.
	#[error("serialization error: {0}")]
	Serialization(String),
}

impl StoreError {
	pub fn persistence_error(message: impl Into<String>) -> Self {
		Self::Persistence(message.into())
	}

	pub fn serialization_error(message: impl Into<String>) -> Self {
		Self::Serialization(message.into())
	}
}

impl From<std::io::Error> for StoreError {
	fn from(error: std::io::Error) -> Self {
		Self::persistence_error(error.to_string())
	}
}

impl From<serde_json::Error> for StoreError {
	fn from(error: serde_json::Error) -> Self {
		Self::serialization_error(error.to_string())
	}
}

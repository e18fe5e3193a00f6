//! Transaction data structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A transaction embedded in a block's `tx` sequence.
///
/// Stored documents are schema-flexible: only `hash` is typed, and every
/// other attribute supplied by the client at insert time is carried verbatim
/// in `extra` so read round-trips reproduce the stored shape.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Transaction {
	/// Lookup key within the parent block. Optional because embedded
	/// records may omit it; such records are skipped by hash lookups.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,

	/// Client-supplied attributes outside the typed core.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Transaction {
	/// Whether this transaction's hash equals the given lookup key.
	pub fn matches_hash(&self, hash: &str) -> bool {
		self.hash.as_deref() == Some(hash)
	}
}

//! Block data structures.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::Transaction;

/// A chain block record: a typed core plus an open attribute bag.
///
/// The collection is schema-flexible, so every core field is optional and
/// anything else the client supplied at insert/update time is preserved
/// verbatim in `extra`. Height and hash are expected unique but the store
/// does not enforce it; keyed operations against a duplicate height resolve
/// to one arbitrary match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Block {
	/// Store-assigned identifier, projected as an opaque string. Never
	/// accepted as client input.
	#[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,

	/// Position in the chain, the primary lookup key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub height: Option<u64>,

	/// Case-sensitive exact-match lookup key.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hash: Option<String>,

	/// Embedded transactions in stored order. `None` when the stored
	/// document has no `tx` field, which is distinct from an empty
	/// sequence and round-trips as such.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub tx: Option<Vec<Transaction>>,

	/// Client-supplied attributes outside the typed core.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Block {
	/// Decode a raw store document into the typed model.
	pub fn from_document(document: Map<String, Value>) -> Result<Self, serde_json::Error> {
		serde_json::from_value(Value::Object(document))
	}

	/// The embedded transactions in stored order; empty when the document
	/// has no `tx` field.
	pub fn transactions(&self) -> &[Transaction] {
		self.tx.as_deref().unwrap_or_default()
	}
}

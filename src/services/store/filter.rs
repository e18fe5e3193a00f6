//! Document query primitives shared by store backends.
//!
//! Filters are conjunctions of per-field conditions with Mongo-style dotted
//! paths: a path segment that lands on an array matches when any element
//! satisfies the remainder of the path. Numeric values compare numerically
//! across integer and float representations.

use std::cmp::Ordering;
use std::fmt;

use serde_json::{Map, Value};
use uuid::Uuid;

/// A schema-flexible record as stored in the collection.
pub type Document = Map<String, Value>;

/// Field under which the store writes the identifier it assigns.
pub const ID_FIELD: &str = "_id";

/// Store-assigned document identity.
///
/// Typed only inside the store layer; everywhere else it travels as an
/// opaque string and is never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
	/// Mint a fresh identifier for a newly inserted document.
	pub fn generate() -> Self {
		Self(Uuid::new_v4())
	}
}

impl fmt::Display for DocumentId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

/// A predicate evaluated against a single document field.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
	/// Field equals the given value exactly.
	Eq(Value),
	/// Numeric field within `[gte, lte]`, inclusive on both ends.
	Between { gte: u64, lte: u64 },
}

impl Condition {
	fn accepts(&self, value: &Value) -> bool {
		match self {
			Condition::Eq(expected) => values_equal(value, expected),
			Condition::Between { gte, lte } => value
				.as_f64()
				.is_some_and(|n| n >= *gte as f64 && n <= *lte as f64),
		}
	}
}

/// Conjunction of field conditions; an empty filter matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
	conditions: Vec<(String, Condition)>,
}

impl Filter {
	/// A filter that matches the whole collection.
	pub fn all() -> Self {
		Self::default()
	}

	/// Exact equality on a (possibly dotted) field path.
	pub fn eq(path: impl Into<String>, value: impl Into<Value>) -> Self {
		Self {
			conditions: vec![(path.into(), Condition::Eq(value.into()))],
		}
	}

	/// Inclusive numeric range on a field path.
	pub fn between(path: impl Into<String>, gte: u64, lte: u64) -> Self {
		Self {
			conditions: vec![(path.into(), Condition::Between { gte, lte })],
		}
	}

	/// Whether the document satisfies every condition of this filter.
	pub fn matches(&self, document: &Document) -> bool {
		self.conditions.iter().all(|(path, condition)| {
			let segments: Vec<&str> = path.split('.').collect();
			match segments.split_first() {
				Some((head, rest)) => document
					.get(*head)
					.is_some_and(|value| any_at(value, rest, &|v| condition.accepts(v))),
				None => false,
			}
		})
	}
}

/// Walks the remaining path segments through objects and arrays; an array is
/// entered element-wise without consuming a segment, so `tx.hash` matches a
/// block whose `tx` array holds any element with that hash.
fn any_at(value: &Value, segments: &[&str], predicate: &dyn Fn(&Value) -> bool) -> bool {
	match segments.split_first() {
		None => predicate(value),
		Some((head, rest)) => match value {
			Value::Object(map) => map
				.get(*head)
				.is_some_and(|inner| any_at(inner, rest, predicate)),
			Value::Array(items) => items.iter().any(|item| any_at(item, segments, predicate)),
			_ => false,
		},
	}
}

/// Equality with numeric cross-representation tolerance: `5` and `5.0`
/// compare equal, everything else falls back to exact value equality.
fn values_equal(a: &Value, b: &Value) -> bool {
	match (a.as_f64(), b.as_f64()) {
		(Some(x), Some(y)) => x == y,
		_ => a == b,
	}
}

/// Direction of an ordered scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
	Ascending,
	Descending,
}

/// Pagination and ordering applied by `DocumentStore::find`.
///
/// Sorting happens before skip and limit. Sorting is stable, so ties keep
/// insertion order, and documents missing the sort field order last under
/// `Descending`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FindOptions {
	pub skip: Option<u64>,
	pub limit: Option<u64>,
	pub sort: Option<(String, SortOrder)>,
}

/// Orders two optional field values for sorting. Missing values order first
/// ascending; numbers order numerically, strings lexicographically, and any
/// other pairing keeps insertion order.
pub(crate) fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
	match (a, b) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Less,
		(Some(_), None) => Ordering::Greater,
		(Some(x), Some(y)) => match (x.as_f64(), y.as_f64()) {
			(Some(m), Some(n)) => m.partial_cmp(&n).unwrap_or(Ordering::Equal),
			_ => match (x.as_str(), y.as_str()) {
				(Some(s), Some(t)) => s.cmp(t),
				_ => Ordering::Equal,
			},
		},
	}
}

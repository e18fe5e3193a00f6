use proptest::{prelude::*, test_runner::Config};
use serde_json::Value;

use crate::properties::strategies::{block_document_strategy, collection_strategy};
use block_gateway::services::store::Filter;

fn height_of(document: &serde_json::Map<String, Value>) -> u64 {
	document.get("height").and_then(Value::as_u64).unwrap()
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	// Range semantics
	#[test]
	fn between_matches_exactly_the_inclusive_window(
		document in block_document_strategy(),
		start in 0..10_000u64,
		end in 0..10_000u64,
	) {
		let height = height_of(&document);
		let expected = start <= height && height <= end;

		prop_assert_eq!(Filter::between("height", start, end).matches(&document), expected);
	}

	// Equality semantics
	#[test]
	fn eq_matches_only_the_exact_height(
		document in block_document_strategy(),
		probe in 0..10_000u64,
	) {
		let height = height_of(&document);

		prop_assert!(Filter::eq("height", height).matches(&document));
		prop_assert_eq!(Filter::eq("height", probe).matches(&document), probe == height);
	}

	#[test]
	fn eq_bridges_integer_and_float_forms(document in block_document_strategy()) {
		let height = height_of(&document);

		prop_assert!(Filter::eq("height", height as f64).matches(&document));
	}

	// Embedded array traversal
	#[test]
	fn tx_hash_path_finds_every_embedded_hash(document in block_document_strategy()) {
		let hashes: Vec<String> = document
			.get("tx")
			.and_then(Value::as_array)
			.unwrap()
			.iter()
			.filter_map(|tx| tx.get("hash").and_then(Value::as_str))
			.map(str::to_string)
			.collect();

		for hash in &hashes {
			prop_assert!(Filter::eq("tx.hash", hash.as_str()).matches(&document));
		}

		// "zz" never appears in the lowercase-hex hash alphabet
		prop_assert!(!Filter::eq("tx.hash", "zz").matches(&document));
	}

	// Universal filter
	#[test]
	fn the_empty_filter_matches_every_document(collection in collection_strategy()) {
		for document in &collection {
			prop_assert!(Filter::all().matches(document));
		}
	}
}

#![no_main]

use libfuzzer_sys::fuzz_target;

use block_gateway::services::store::{Document, Filter};

fuzz_target!(|data: &[u8]| {
	let Ok(document) = serde_json::from_slice::<Document>(data) else {
		return;
	};

	let filters = [
		Filter::all(),
		Filter::eq("height", 5),
		Filter::eq("hash", "abc"),
		Filter::eq("tx.hash", "abc"),
		Filter::eq("a.b.c.d", 0),
		Filter::between("height", 0, u64::MAX),
		Filter::between("height", 10, 5),
	];
	for filter in &filters {
		let _ = filter.matches(&document);
	}
});

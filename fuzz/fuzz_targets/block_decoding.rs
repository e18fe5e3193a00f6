#![no_main]

use libfuzzer_sys::fuzz_target;

use block_gateway::models::Block;
use block_gateway::services::store::Document;

fuzz_target!(|data: &[u8]| {
	let Ok(document) = serde_json::from_slice::<Document>(data) else {
		return;
	};

	if let Ok(block) = Block::from_document(document) {
		let _ = block.transactions();
		let _ = serde_json::to_string(&block);
	}
});

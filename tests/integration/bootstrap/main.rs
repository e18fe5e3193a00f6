use serde_json::json;

use crate::integration::mocks::doc;
use block_gateway::bootstrap::initialize_services;

#[tokio::test]
async fn a_restart_reloads_what_the_service_persisted() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("blocks.json");

	let service = initialize_services(Some(path.clone())).await.unwrap();
	let id = service
		.insert_block(doc(json!({"height": 9, "hash": "z"})))
		.await
		.unwrap();
	drop(service);

	let restarted = initialize_services(Some(path)).await.unwrap();
	let block = restarted.block_by_height(9).await.unwrap();

	assert_eq!(block.hash.as_deref(), Some("z"));
	assert_eq!(block.id.as_deref(), Some(id.as_str()));
}

#[tokio::test]
async fn startup_fails_loudly_on_an_unreadable_collection() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("blocks.json");
	std::fs::write(&path, "[{]").unwrap();

	let error = initialize_services(Some(path)).await.unwrap_err();

	assert!(error.to_string().contains("serialization error"));
}

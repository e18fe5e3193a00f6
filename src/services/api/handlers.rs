//! HTTP request handlers for the block query routes.
//!
//! Handlers stay thin: decode path and query input, call the query service,
//! map the outcome onto a status code. Error bodies are always
//! `{"error": <reason>}` with the service's own wording.

use std::sync::Arc;

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::services::query::{BlockQueryService, QueryError};
use crate::services::store::{Document, DocumentStore};

/// Injected query service handle, shared across workers.
pub type QueryServiceData<S> = web::Data<Arc<BlockQueryService<S>>>;

const WELCOME_MESSAGE: &str = "Welcome to the Block Gateway API!";

/// Pagination query parameters of `GET /blocks`.
#[derive(Debug, Deserialize)]
pub struct PageParams {
	#[serde(default = "default_page")]
	pub page: u64,
	#[serde(default = "default_per_page")]
	pub per_page: u64,
}

fn default_page() -> u64 {
	1
}

fn default_per_page() -> u64 {
	10
}

/// Height window query parameters of `GET /blocks/range`.
#[derive(Debug, Deserialize)]
pub struct RangeParams {
	#[serde(default)]
	pub start: u64,
	#[serde(default = "default_range_end")]
	pub end: u64,
}

fn default_range_end() -> u64 {
	10
}

/// Welcome route handler.
pub async fn index() -> impl Responder {
	HttpResponse::Ok().json(json!({ "message": WELCOME_MESSAGE }))
}

pub async fn block_by_height<S: DocumentStore>(
	service: QueryServiceData<S>,
	path: web::Path<u64>,
) -> HttpResponse {
	respond(service.block_by_height(path.into_inner()).await)
}

pub async fn list_blocks<S: DocumentStore>(
	service: QueryServiceData<S>,
	params: web::Query<PageParams>,
) -> HttpResponse {
	respond(service.list_blocks(params.page, params.per_page).await)
}

pub async fn blocks_in_range<S: DocumentStore>(
	service: QueryServiceData<S>,
	params: web::Query<RangeParams>,
) -> HttpResponse {
	respond(service.blocks_in_range(params.start, params.end).await)
}

pub async fn block_by_hash<S: DocumentStore>(
	service: QueryServiceData<S>,
	path: web::Path<String>,
) -> HttpResponse {
	respond(service.block_by_hash(&path.into_inner()).await)
}

pub async fn latest_block<S: DocumentStore>(service: QueryServiceData<S>) -> HttpResponse {
	respond(service.latest_block().await)
}

pub async fn transaction_by_hash<S: DocumentStore>(
	service: QueryServiceData<S>,
	path: web::Path<String>,
) -> HttpResponse {
	respond(service.transaction_by_hash(&path.into_inner()).await)
}

pub async fn transactions_in_block<S: DocumentStore>(
	service: QueryServiceData<S>,
	path: web::Path<u64>,
) -> HttpResponse {
	respond(service.transactions_in_block(path.into_inner()).await)
}

/// Inserts the posted document as a new block.
///
/// A body that does not parse into a non-empty JSON object is treated as an
/// absent payload. Insert failures are reported with the operation's own
/// context, keeping the store's detail in the response.
pub async fn insert_block<S: DocumentStore>(
	service: QueryServiceData<S>,
	body: web::Bytes,
) -> HttpResponse {
	let Some(document) = parse_document(&body) else {
		return empty_payload_response();
	};
	match service.insert_block(document).await {
		Ok(block_id) => HttpResponse::Created().json(json!({
			"message": "Block added",
			"block_id": block_id,
		})),
		Err(error) if error.is_invalid_input() => {
			HttpResponse::BadRequest().json(json!({ "error": error.to_string() }))
		}
		Err(error) => {
			error!("Failed to add block: {}", error);
			HttpResponse::InternalServerError()
				.json(json!({ "error": format!("Failed to add block. {}", error) }))
		}
	}
}

pub async fn update_block<S: DocumentStore>(
	service: QueryServiceData<S>,
	path: web::Path<u64>,
	body: web::Bytes,
) -> HttpResponse {
	let Some(patch) = parse_document(&body) else {
		return empty_payload_response();
	};
	respond(service.update_block(path.into_inner(), patch).await)
}

pub async fn delete_block<S: DocumentStore>(
	service: QueryServiceData<S>,
	path: web::Path<u64>,
) -> HttpResponse {
	match service.delete_block(path.into_inner()).await {
		Ok(_) => HttpResponse::Ok().json(json!({ "message": "Block deleted successfully" })),
		Err(error) => error_response(&error),
	}
}

fn parse_document(body: &[u8]) -> Option<Document> {
	serde_json::from_slice::<Document>(body)
		.ok()
		.filter(|document| !document.is_empty())
}

fn empty_payload_response() -> HttpResponse {
	HttpResponse::BadRequest().json(json!({ "error": "Invalid request. No JSON data provided." }))
}

fn respond<T: serde::Serialize>(result: Result<T, QueryError>) -> HttpResponse {
	match result {
		Ok(value) => HttpResponse::Ok().json(value),
		Err(error) => error_response(&error),
	}
}

fn error_response(error: &QueryError) -> HttpResponse {
	if error.is_not_found() {
		return HttpResponse::NotFound().json(json!({ "error": error.to_string() }));
	}
	if error.is_invalid_input() {
		return HttpResponse::BadRequest().json(json!({ "error": error.to_string() }));
	}
	error!("Query operation failed: {}", error);
	HttpResponse::InternalServerError().json(json!({ "error": error.to_string() }))
}

//! HTTP server assembly for the block gateway.
//!
//! Builds the actix-web application serving the block query routes and
//! returns the unstarted server so the caller controls its lifecycle.

use std::sync::Arc;

use actix_web::middleware::{Compress, DefaultHeaders, NormalizePath};
use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::services::query::BlockQueryService;
use crate::services::store::DocumentStore;

use super::handlers;

/// Registers every gateway route. Literal segments come before the numeric
/// `{height}` catcher so `/blocks/latest` and friends resolve first.
pub fn configure_routes<S: DocumentStore + 'static>(config: &mut web::ServiceConfig) {
	config
		.route("/", web::get().to(handlers::index))
		.route("/blocks", web::get().to(handlers::list_blocks::<S>))
		.route("/blocks", web::post().to(handlers::insert_block::<S>))
		.route("/blocks/latest", web::get().to(handlers::latest_block::<S>))
		.route("/blocks/range", web::get().to(handlers::blocks_in_range::<S>))
		.route("/blocks/hash/{hash}", web::get().to(handlers::block_by_hash::<S>))
		.route(
			"/blocks/transaction/{hash}",
			web::get().to(handlers::transaction_by_hash::<S>),
		)
		.route(
			"/blocks/{height:\\d+}",
			web::get().to(handlers::block_by_height::<S>),
		)
		.route(
			"/blocks/{height:\\d+}",
			web::put().to(handlers::update_block::<S>),
		)
		.route(
			"/blocks/{height:\\d+}",
			web::delete().to(handlers::delete_block::<S>),
		)
		.route(
			"/blocks/{height:\\d+}/transactions",
			web::get().to(handlers::transactions_in_block::<S>),
		);
}

/// Rewrites the bind address for containerized runs, where the server must
/// listen on all interfaces while keeping the configured port.
fn resolve_bind_address(bind_address: &str, in_docker: bool) -> String {
	if !in_docker {
		return bind_address.to_string();
	}
	match bind_address.split(':').nth(1) {
		Some(port) => format!("0.0.0.0:{}", port),
		None => "0.0.0.0:8080".to_string(),
	}
}

/// Creates the gateway HTTP server bound to `bind_address`.
pub fn create_api_server<S: DocumentStore + 'static>(
	bind_address: String,
	query_service: Arc<BlockQueryService<S>>,
) -> std::io::Result<actix_web::dev::Server> {
	let in_docker = std::env::var("IN_DOCKER").unwrap_or_default() == "true";
	let actual_bind_address = resolve_bind_address(&bind_address, in_docker);

	info!(
		"Starting block gateway server on {} (actual bind: {})",
		bind_address, actual_bind_address
	);

	Ok(HttpServer::new(move || {
		App::new()
			.wrap(Compress::default())
			.wrap(NormalizePath::trim())
			.wrap(DefaultHeaders::new())
			.app_data(web::Data::new(query_service.clone()))
			.configure(configure_routes::<S>)
	})
	.workers(2)
	.bind(actual_bind_address)?
	.shutdown_timeout(5)
	.run())
}

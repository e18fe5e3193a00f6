//! Block gateway service entry point.
//!
//! This binary provides the main entry point for the block gateway. It loads
//! the block collection from disk, assembles the query service and serves the
//! REST API until interrupted.
//!
//! # Architecture
//! The service is built around a few key components:
//! - Models: Typed views over the stored block documents
//! - Store: Document persistence with filtering, sorting and pagination
//! - Query service: Read and write operations over the collection
//! - API: actix-web HTTP surface exposing the query operations
//!
//! # Flow
//! 1. Parses command-line flags and environment configuration
//! 2. Loads the block collection from the data file
//! 3. Serves the REST API on the configured address
//! 4. Handles graceful shutdown on Ctrl+C

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;

use crate::{
	bootstrap::{initialize_services, Result},
	services::api::create_api_server,
	utils::{constants::DEFAULT_BIND_ADDRESS, logging::setup_logging},
};

use clap::{Arg, Command};
use dotenvy::dotenv;
use std::env::{set_var, var};
use std::path::PathBuf;
use tracing::{error, info};

/// Main entry point for the block gateway service.
///
/// # Errors
/// Returns an error if the collection cannot be loaded or the server cannot
/// bind its address.
#[tokio::main]
async fn main() -> Result<()> {
	// Initialize command-line interface
	let matches = Command::new("block-gateway")
		.version(env!("CARGO_PKG_VERSION"))
		.about(
			"A REST gateway serving block and transaction queries over a durable block \
			 collection.",
		)
		.arg(
			Arg::new("log-level")
				.long("log-level")
				.help("Set log level (trace, debug, info, warn, error)")
				.value_name("LEVEL"),
		)
		.arg(
			Arg::new("address")
				.long("address")
				.help("Address to serve the API on (default: 127.0.0.1:8080)")
				.value_name("HOST:PORT"),
		)
		.arg(
			Arg::new("data-file")
				.long("data-file")
				.help("Path of the JSON file backing the block collection (default: data/blocks.json)")
				.value_name("PATH"),
		)
		.get_matches();

	// Load environment variables from .env file
	dotenv().ok();

	// Only apply CLI options if the corresponding environment variables are NOT already set
	if let Some(level) = matches.get_one::<String>("log-level") {
		if var("LOG_LEVEL").is_err() {
			set_var("LOG_LEVEL", level);
		}
	}

	if let Some(address) = matches.get_one::<String>("address") {
		if var("API_ADDRESS").is_err() {
			set_var("API_ADDRESS", address);
		}
	}

	if let Some(path) = matches.get_one::<String>("data-file") {
		if var("DATA_FILE").is_err() {
			set_var("DATA_FILE", path);
		}
	}

	// Setup logging to stdout
	setup_logging().unwrap_or_else(|e| {
		error!("Failed to setup logging: {}", e);
	});

	let bind_address = var("API_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
	let data_file = var("DATA_FILE").ok().map(PathBuf::from);

	let query_service = initialize_services(data_file)
		.await
		.map_err(|e| anyhow::anyhow!("Failed to initialize services: {}", e))?;

	let server = create_api_server(bind_address, query_service)
		.map_err(|e| anyhow::anyhow!("Failed to create API server: {}", e))?;

	info!("Service started. Press Ctrl+C to shutdown");

	let ctrl_c = tokio::signal::ctrl_c();

	tokio::select! {
		result = ctrl_c => {
			if let Err(e) = result {
				error!("Error waiting for Ctrl+C: {}", e);
			}
			info!("Shutdown signal received, stopping server...");
		}
		result = server => {
			if let Err(e) = result {
				error!("Server error: {}", e);
			}
			info!("Server stopped, shutting down...");
		}
	}

	info!("Shutdown complete");
	Ok(())
}

//! Constants used across the application.

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

/// Default JSON file backing the block collection.
pub const DEFAULT_DATA_FILE: &str = "data/blocks.json";

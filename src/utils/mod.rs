//! Utility modules for common functionality.
//!
//! This module provides utility functions and types used across the
//! application. Currently includes:
//!
//! - constants: Default values for the server and storage
//! - logging: Logging utilities

pub mod constants;
pub mod logging;

pub use constants::*;

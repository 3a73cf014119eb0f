//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - The shared HTTP client (the request context every fetch borrows)
//! - The logger
//!
//! All initialization functions return `InitializationError` on failure.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

//! Main application modules.
//!
//! This module provides target resolution, end-of-run statistics logging, and
//! the exit code policy used by the binary.

pub mod exit_code;
pub mod statistics;
pub mod targets;

// Re-export public API
pub use exit_code::evaluate_exit_code;
pub use statistics::{log_error_statistics, log_run_summary};
pub use targets::{read_targets, resolve_targets};

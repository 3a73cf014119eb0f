//! End-of-run statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs a one-line summary of the run.
///
/// Goes through the logger (stderr), never stdout, so the result lines stay
/// the only thing on stdout.
pub fn log_run_summary(total_urls: usize, reachable: usize, failed: usize, elapsed_seconds: f64) {
    info!(
        "Checked {} address{} ({} reachable, {} failed) in {:.2}s",
        total_urls,
        if total_urls == 1 { "" } else { "es" },
        reachable,
        failed,
        elapsed_seconds
    );
}

/// Logs a breakdown of failures by category. Nothing is logged when no fetch failed.
pub fn log_error_statistics(error_stats: &ProcessingStats) {
    let total = error_stats.total_errors();
    if total == 0 {
        return;
    }

    info!("Error counts ({} total):", total);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type, count);
        }
    }
}

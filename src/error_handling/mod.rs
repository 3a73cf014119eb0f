//! Error handling and failure statistics.
//!
//! This module provides:
//! - The setup error type (`InitializationError`)
//! - Categories for per-address fetch failures (`ErrorType`)
//! - Thread-safe failure counters (`ProcessingStats`)
//!
//! Per-address failures never escape a fetch. They are counted here and
//! rendered as output lines; only setup failures are returned as errors.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::categorize_reqwest_error;
pub use stats::ProcessingStats;
pub use types::{ErrorType, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use strum::IntoEnumIterator;

    #[test]
    fn test_processing_stats_initialization() {
        let stats = ProcessingStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_processing_stats_totals() {
        let stats = ProcessingStats::new();
        stats.increment_error(ErrorType::HttpRequestConnectError);
        stats.increment_error(ErrorType::HttpRequestConnectError);
        stats.increment_error(ErrorType::HttpRequestTimeoutError);

        assert_eq!(stats.get_error_count(ErrorType::HttpRequestConnectError), 2);
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestTimeoutError), 1);
        assert_eq!(stats.total_errors(), 3);
    }

    #[test]
    fn test_processing_stats_concurrent_increments() {
        let stats = Arc::new(ProcessingStats::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        stats.increment_error(ErrorType::HttpRequestOtherError);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(stats.get_error_count(ErrorType::HttpRequestOtherError), 800);
    }
}

//! web_status_checker library: concurrent reachability checks over a list of web addresses.
//!
//! Every address gets one GET request through a single shared HTTP client. All
//! requests are in flight at once, and each one reports exactly one line:
//!
//! - `{address} : {status_code}` when a response arrives (any status)
//! - `Error fetching {address} : {error_description}` otherwise
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use web_status_checker::{run_check, Config, MemorySink};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: vec!["https://www.example.com".to_string()],
//!     ..Default::default()
//! };
//!
//! let sink = Arc::new(MemorySink::new());
//! let report = run_check(config, sink.clone()).await?;
//! println!("{} reachable, {} failed", report.reachable, report.failed);
//! for line in sink.lines() {
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod output;

// Re-export public API
pub use config::{Config, FailOn, LogFormat, LogLevel};
pub use error_handling::{ErrorType, InitializationError, ProcessingStats};
pub use fetch::{fetch_status, Outcome};
pub use output::{MemorySink, OutcomeSink, StdoutSink};
pub use run::{run_check, CheckReport};

// Internal run module (contains the dispatch logic)
mod run {
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use futures::stream::FuturesUnordered;
    use futures::StreamExt;
    use log::{debug, info, warn};

    use crate::app::{log_error_statistics, log_run_summary, resolve_targets};
    use crate::config::Config;
    use crate::error_handling::{ErrorType, ProcessingStats};
    use crate::fetch::{fetch_status, Outcome};
    use crate::initialization::init_client;
    use crate::output::OutcomeSink;

    /// Summary of a completed check run.
    #[derive(Debug, Clone)]
    pub struct CheckReport {
        /// Number of addresses checked
        pub total_urls: usize,
        /// Addresses that returned any HTTP status
        pub reachable: usize,
        /// Addresses that produced an error line
        pub failed: usize,
        /// Fetch tasks that panicked (included in `failed`)
        pub panicked_tasks: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Checks every target address concurrently and waits for all of them.
    ///
    /// One task is spawned per address, all sharing a single HTTP client. Each
    /// task emits exactly one line to `sink`. Lines appear in completion order,
    /// not input order. The function returns only after every task has
    /// finished, and the shared client is released before it returns.
    ///
    /// Per-address failures never make this function fail; they are counted
    /// in the returned report.
    ///
    /// # Errors
    ///
    /// Returns an error only if setup fails:
    /// - The input file cannot be opened or read
    /// - The HTTP client cannot be constructed
    pub async fn run_check(config: Config, sink: Arc<dyn OutcomeSink>) -> Result<CheckReport> {
        let targets = resolve_targets(&config)
            .await
            .context("Failed to resolve target addresses")?;
        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let error_stats = Arc::new(ProcessingStats::new());

        let total_urls = targets.len();
        info!("Checking {} address{}", total_urls, if total_urls == 1 { "" } else { "es" });
        let start_time = Instant::now();

        let mut tasks = FuturesUnordered::new();
        for target in targets {
            let url: Arc<str> = Arc::from(target);
            let url_for_task = Arc::clone(&url);
            let client = Arc::clone(&client);
            let sink_for_task = Arc::clone(&sink);
            let stats_for_task = Arc::clone(&error_stats);

            let handle = tokio::spawn(async move {
                fetch_status(
                    &client,
                    &url_for_task,
                    sink_for_task.as_ref(),
                    &stats_for_task,
                )
                .await
            });
            tasks.push(async move { (url, handle.await) });
        }

        let mut reachable = 0usize;
        let mut failed = 0usize;
        while let Some((url, task_result)) = tasks.next().await {
            match task_result {
                Ok(outcome) if outcome.is_reachable() => reachable += 1,
                Ok(_) => failed += 1,
                Err(join_error) => {
                    // The task never emitted its line; emit it here to keep one line per address
                    failed += 1;
                    warn!("Fetch task for {} panicked: {:?}", url, join_error);
                    error_stats.increment_error(ErrorType::TaskPanicked);
                    let outcome = Outcome::Error(join_error.to_string());
                    sink.emit(&outcome.line(&url).to_string());
                }
            }
        }

        drop(client);
        debug!("Released shared HTTP client");

        let elapsed_seconds = start_time.elapsed().as_secs_f64();
        log_run_summary(total_urls, reachable, failed, elapsed_seconds);
        log_error_statistics(&error_stats);

        Ok(CheckReport {
            total_urls,
            reachable,
            failed,
            panicked_tasks: error_stats.get_error_count(ErrorType::TaskPanicked),
            elapsed_seconds,
        })
    }
}

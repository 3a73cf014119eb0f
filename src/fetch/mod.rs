//! Single-address fetch.
//!
//! `fetch_status` issues one GET against one address through the shared
//! client and reports the outcome as exactly one output line. Errors never
//! leave this module: a failed fetch becomes an `Outcome::Error` line so one
//! bad address cannot affect any other.

mod outcome;

use log::debug;

use crate::error_handling::{categorize_reqwest_error, ProcessingStats};
use crate::output::OutcomeSink;

pub use outcome::{Outcome, OutcomeLine};

/// Fetches one address and emits its result line.
///
/// Any response counts as reachable; the status code is reported and the
/// body is never read. Failures are categorized into `stats`, rendered with
/// their full cause chain, and emitted as an error line.
///
/// # Arguments
///
/// * `client` - The shared HTTP client for this run
/// * `url` - Address to fetch, used verbatim
/// * `sink` - Destination for the result line
/// * `stats` - Failure counters shared across the run
pub async fn fetch_status(
    client: &reqwest::Client,
    url: &str,
    sink: &dyn OutcomeSink,
    stats: &ProcessingStats,
) -> Outcome {
    let outcome = match client.get(url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            debug!("Received status {status} from {url}");
            Outcome::Status(status)
        }
        Err(e) => {
            let error_type = categorize_reqwest_error(&e);
            stats.increment_error(error_type);
            debug!("Failed to fetch {url} ({error_type}): {e}");
            Outcome::Error(describe_error(e, error_type.as_str()))
        }
    };

    sink.emit(&outcome.line(url).to_string());
    outcome
}

/// Renders an error with its whole cause chain.
///
/// `reqwest` keeps the useful part (e.g. "Connection refused") in the source
/// chain, so the alternate `anyhow` format is used. Falls back to `fallback`
/// so the description is never empty.
fn describe_error(error: reqwest::Error, fallback: &str) -> String {
    let rendered = format!("{:#}", anyhow::Error::from(error));
    if rendered.trim().is_empty() {
        fallback.to_string()
    } else {
        rendered
    }
}

//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Initializes the shared HTTP client used by every fetch in a run.
///
/// Creates a `reqwest::Client` with the library defaults (connection pooling,
/// redirect following up to 10 hops, no overall timeout). Only two settings
/// can be changed from the configuration:
/// - `timeout_seconds`: per-request timeout, unset by default
/// - `user_agent`: User-Agent header, reqwest's default when unset
///
/// The returned `Arc` is cloned into each fetch task. The client and its
/// pooled connections are released once the last clone is dropped.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the TLS backend or the
/// client configuration cannot be initialized.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, InitializationError> {
    let mut builder = ClientBuilder::new();
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent.clone());
    }
    let client = builder.build()?;
    Ok(Arc::new(client))
}

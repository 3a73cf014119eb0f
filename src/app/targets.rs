//! Target address resolution.
//!
//! Addresses are passed to the fetcher verbatim. They are not validated or
//! normalized here: a malformed address still produces its own error line.

use std::io;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

use crate::config::{Config, COMMENT_PREFIX, DEFAULT_TARGETS, STDIN_PATH};

/// Resolves the addresses to check for this run.
///
/// Precedence: positional URLs, then `--file` (`-` for stdin), then the
/// built-in `DEFAULT_TARGETS` list.
///
/// # Errors
///
/// Returns an error if the input file cannot be opened or read.
pub async fn resolve_targets(config: &Config) -> Result<Vec<String>> {
    if !config.urls.is_empty() {
        return Ok(config.urls.clone());
    }

    match &config.file {
        Some(path) if path.as_os_str() == STDIN_PATH => {
            info!("Reading addresses from stdin");
            read_targets(tokio::io::stdin())
                .await
                .context("Failed to read addresses from stdin")
        }
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open input file {}", path.display()))?;
            let targets = read_targets(file)
                .await
                .with_context(|| format!("Failed to read input file {}", path.display()))?;
            info!("Total addresses in file: {}", targets.len());
            Ok(targets)
        }
        None => Ok(DEFAULT_TARGETS.iter().map(|s| s.to_string()).collect()),
    }
}

/// Reads one address per line, skipping blank lines and `#` comments.
pub async fn read_targets<R: AsyncRead + Unpin>(reader: R) -> io::Result<Vec<String>> {
    let mut lines = BufReader::new(reader).lines();
    let mut targets = Vec::new();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
            continue;
        }
        targets.push(trimmed.to_string());
    }
    Ok(targets)
}

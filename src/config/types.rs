//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exit code policy applied after a completed run.
///
/// The default (`Never`) keeps the process exit code at 0 no matter how many
/// addresses failed. Failures are reported only through the output lines.
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 after a completed run
    #[default]
    Never,
    /// Exit non-zero if any address failed
    AnyFailure,
    /// Exit non-zero only if every address failed
    AllFailed,
}

/// Command-line options and configuration.
///
/// Every field has a default, so running with no arguments checks the
/// built-in address list. The struct can also be constructed
/// programmatically via `Default`.
///
/// # Examples
///
/// ```bash
/// # Check the built-in list
/// web_status_checker
///
/// # Check specific addresses
/// web_status_checker https://example.com https://example.org
///
/// # Read addresses from a file (one per line, `#` comments allowed)
/// web_status_checker --file urls.txt
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "web_status_checker",
    version,
    about = "Checks web addresses concurrently and prints each status code or error."
)]
pub struct Config {
    /// Addresses to check (defaults to the built-in list)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// File with one address per line ("-" reads stdin)
    #[arg(long, value_parser, conflicts_with = "urls")]
    pub file: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds (unset keeps the HTTP client's default)
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// HTTP User-Agent header value (unset keeps the HTTP client's default)
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Exit code policy: never|any-failure|all-failed
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            file: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: None,
            user_agent: None,
            fail_on: FailOn::Never,
        }
    }
}

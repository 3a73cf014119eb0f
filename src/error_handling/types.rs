//! Error type definitions.
//!
//! This module defines the setup error type and the categories used to count
//! per-address fetch failures.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Categories of failures that can end a single fetch.
///
/// A fetch that receives any HTTP response (including 4xx and 5xx) is not a
/// failure; these only cover cases where no status code was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    /// Request could not be built (e.g. malformed URL)
    HttpRequestBuilderError,
    /// Redirect loop or too many redirects
    HttpRequestRedirectError,
    /// Request or connection timed out
    HttpRequestTimeoutError,
    /// Connection failed (DNS, refused, TLS handshake)
    HttpRequestConnectError,
    /// Failure while sending the request
    HttpRequestRequestError,
    /// Failure reading the response body
    HttpRequestBodyError,
    /// Failure decoding the response
    HttpRequestDecodeError,
    /// Any other client error
    HttpRequestOtherError,
    /// The fetch task itself panicked or was cancelled
    TaskPanicked,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Human-readable label used in the end-of-run statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::HttpRequestBuilderError => "HTTP request builder error",
            ErrorType::HttpRequestRedirectError => "HTTP request redirect error",
            ErrorType::HttpRequestTimeoutError => "HTTP request timeout error",
            ErrorType::HttpRequestConnectError => "HTTP request connect error",
            ErrorType::HttpRequestRequestError => "HTTP request error",
            ErrorType::HttpRequestBodyError => "HTTP request body error",
            ErrorType::HttpRequestDecodeError => "HTTP request decode error",
            ErrorType::HttpRequestOtherError => "HTTP request other error",
            ErrorType::TaskPanicked => "Fetch task panicked",
        }
    }
}

//! Per-address outcome and its output line.

use std::fmt;

/// Result of a single fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A response was received with this status code (any class, 4xx/5xx included).
    Status(u16),
    /// No response was obtained; holds the rendered error chain.
    Error(String),
}

impl Outcome {
    /// True when a status code was obtained.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Outcome::Status(_))
    }

    /// Pairs this outcome with its address for rendering.
    pub fn line<'a>(&'a self, url: &'a str) -> OutcomeLine<'a> {
        OutcomeLine { url, outcome: self }
    }
}

/// Display adapter producing the single output line for one address.
///
/// - `{url} : {status}` on success
/// - `Error fetching {url} : {description}` on failure
pub struct OutcomeLine<'a> {
    url: &'a str,
    outcome: &'a Outcome,
}

impl fmt::Display for OutcomeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Status(code) => write!(f, "{} : {}", self.url, code),
            Outcome::Error(description) => {
                write!(f, "Error fetching {} : {}", self.url, description)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let outcome = Outcome::Status(404);
        assert_eq!(
            outcome.line("https://notfound.test").to_string(),
            "https://notfound.test : 404"
        );
        assert!(outcome.is_reachable());
    }

    #[test]
    fn test_error_line() {
        let outcome = Outcome::Error("connection refused".to_string());
        assert_eq!(
            outcome.line("https://unreachable.test").to_string(),
            "Error fetching https://unreachable.test : connection refused"
        );
        assert!(!outcome.is_reachable());
    }
}

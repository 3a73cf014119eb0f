//! Result line sinks.
//!
//! Each fetch writes exactly one line through an `OutcomeSink`. The binary uses
//! `StdoutSink`; tests and library callers can collect lines with `MemorySink`.

use std::io::Write;
use std::sync::Mutex;

/// Destination for per-address result lines.
///
/// Implementations must write each line as a single unit so lines from
/// concurrent fetches never interleave mid-line.
pub trait OutcomeSink: Send + Sync {
    /// Writes one result line. `line` carries no trailing newline.
    fn emit(&self, line: &str);
}

/// Writes result lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl OutcomeSink for StdoutSink {
    fn emit(&self, line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            // A closed pipe must not abort the remaining fetches
            log::warn!("Failed to write result line to stdout: {e}");
        }
    }
}

/// Collects result lines in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the lines emitted so far, in emission order.
    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl OutcomeSink for MemorySink {
    fn emit(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

//! Configuration constants.

/// Addresses checked when no URLs or input file are given.
pub const DEFAULT_TARGETS: &[&str] = &[
    "https://www.example.com",
    "https://www.python.org",
    "https://www.github.com",
    "https://www.reddit.com",
];

/// Log target for this crate, used to scope the CLI log level.
pub const LOGGING_TARGET: &str = "web_status_checker";

/// Input path that means "read targets from stdin".
pub const STDIN_PATH: &str = "-";

/// Marker for comment lines in target files.
pub const COMMENT_PREFIX: char = '#';

/// Exit code used by the opt-in `--fail-on` policies.
pub const EXIT_CODE_POLICY_FAILURE: i32 = 2;

/// Exit code for setup failures (unreadable input, client construction).
pub const EXIT_CODE_SETUP_FAILURE: i32 = 1;

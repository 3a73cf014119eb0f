//! Process exit code policy.

use crate::config::{FailOn, EXIT_CODE_POLICY_FAILURE};
use crate::CheckReport;

/// Maps a completed run to a process exit code.
///
/// With the default `FailOn::Never` this is always 0: per-address failures are
/// reported only through output lines. The stricter policies are opt-in.
pub fn evaluate_exit_code(fail_on: &FailOn, report: &CheckReport) -> i32 {
    let failing = match fail_on {
        FailOn::Never => false,
        FailOn::AnyFailure => report.failed > 0,
        FailOn::AllFailed => report.total_urls > 0 && report.failed == report.total_urls,
    };
    if failing {
        EXIT_CODE_POLICY_FAILURE
    } else {
        0
    }
}

use std::process::ExitCode;

use crate::issues::Issue;

/// Process exit status of a `jsmsg` invocation.
///
/// - `Success` (0): the pass completed with warnings at most
/// - `Failure` (1): at least one error-severity diagnostic, or `init` found
///   an existing config
/// - `Error` (2): the command could not run (bad config, I/O failure)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    /// Status for a finished pass over `issues`.
    pub fn from_issues(issues: &[Issue]) -> Self {
        if issues.iter().any(Issue::is_error) {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(match status {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Error => 2,
        })
    }
}

//! Error type for a trimming run.

use std::path::PathBuf;

use thiserror::Error;

/// Failure of [`crate::trim::run_trimming`].
#[derive(Debug, Error)]
pub enum TrimError {
    /// The trimming tool ran and exited with a non-zero status.
    #[error("{program} exited with status {exit_code}{}", stderr_suffix(.stderr))]
    ProcessExecution {
        /// Program that was started.
        program: String,
        /// Exit status, `-1` when the process was killed by a signal.
        exit_code: i32,
        /// Standard error captured from the tool.
        stderr: String,
    },

    /// The trimming tool could not be started.
    #[error("failed to start {program}")]
    Spawn {
        /// Program that was started.
        program: String,
        /// Underlying spawn error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A filesystem operation on `path` failed.
    #[error("{action} {}", .path.display())]
    Filesystem {
        /// What was being done, e.g. "failed to remove".
        action: &'static str,
        /// Path the operation was applied to.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Writing the verbose command line failed.
    #[error("failed to write command report")]
    Report(#[source] std::io::Error),
}

impl TrimError {
    /// Exit status of the trimming tool, if it ran and failed.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ProcessExecution { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }
}

/// Last non-empty line of the tool's stderr, which is where Trimmomatic puts
/// the reason it gave up.
fn stderr_suffix(stderr: &str) -> String {
    stderr
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| format!(": {line}"))
        .unwrap_or_default()
}

//! Command executor port for running external programs.

use std::ffi::{OsStr, OsString};

use serde::{Deserialize, Serialize};

/// The output of a finished child process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// The exit code of the process, or `-1` if it was killed by a signal.
    pub exit_code: i32,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns `true` if the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executes external programs.
///
/// Arguments are handed to the program as a vector; no shell ever sees them,
/// so paths containing spaces or metacharacters reach the child verbatim.
pub trait CommandExecutor: Send + Sync {
    /// Runs `program` with `args`, waits for it to exit and returns its output.
    ///
    /// A non-zero exit is not an error at this level; callers inspect
    /// [`CommandOutput::exit_code`].
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned or waited on.
    fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>>;
}

//! Live command executor using `std::process::Command`.

use std::ffi::{OsStr, OsString};
use std::process::{Command, Stdio};

use crate::ports::command::{CommandExecutor, CommandOutput};

/// Live executor that spawns the program directly, without a shell.
pub struct LiveCommandExecutor;

impl CommandExecutor for LiveCommandExecutor {
    fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = Command::new(program).args(args).stdin(Stdio::null()).output()?;
        Ok(CommandOutput {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<OsString> {
        items.iter().map(OsString::from).collect()
    }

    #[test]
    fn runs_echo_command() {
        let executor = LiveCommandExecutor;
        let result = executor.run(OsStr::new("echo"), &args(&["hello"])).unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "hello");
        assert!(result.stderr.is_empty());
    }

    #[test]
    fn captures_exit_code_and_stderr() {
        let executor = LiveCommandExecutor;
        let result =
            executor.run(OsStr::new("sh"), &args(&["-c", "echo oops >&2; exit 42"])).unwrap();

        assert_eq!(result.exit_code, 42);
        assert_eq!(result.stderr.trim(), "oops");
    }

    #[test]
    fn arguments_are_not_interpreted_by_a_shell() {
        let executor = LiveCommandExecutor;
        let result = executor.run(OsStr::new("echo"), &args(&["$HOME; exit 3"])).unwrap();

        assert!(result.success());
        assert_eq!(result.stdout.trim(), "$HOME; exit 3");
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let executor = LiveCommandExecutor;
        let result = executor.run(OsStr::new("/nonexistent/pairtrim-tool"), &[]);

        assert!(result.is_err());
    }
}

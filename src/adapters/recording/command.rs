//! Recording adapter for the `CommandExecutor` port.

use std::ffi::{OsStr, OsString};
use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{CommandExecutor, CommandOutput};

/// Records command executions while delegating to an inner implementation.
pub struct RecordingCommandExecutor {
    inner: Box<dyn CommandExecutor>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCommandExecutor {
    /// Creates a new recording executor wrapping the given implementation.
    pub fn new(inner: Box<dyn CommandExecutor>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

#[derive(Serialize)]
struct RunInput {
    program: String,
    args: Vec<String>,
}

impl CommandExecutor for RecordingCommandExecutor {
    fn run(
        &self,
        program: &OsStr,
        args: &[OsString],
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.run(program, args);
        let input = RunInput {
            program: program.to_string_lossy().into_owned(),
            args: args.iter().map(|a| a.to_string_lossy().into_owned()).collect(),
        };
        record_result(&self.recorder, "command", "run", &input, &result);
        result
    }
}

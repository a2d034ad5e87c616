//! Replaying adapter for the `CommandExecutor` port.

use std::ffi::{OsStr, OsString};
use std::sync::Mutex;

use super::extract_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::command::{CommandExecutor, CommandOutput};

/// Replays recorded command results from a cassette.
pub struct ReplayingCommandExecutor {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingCommandExecutor {
    /// Creates a new replaying executor from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl CommandExecutor for ReplayingCommandExecutor {
    fn run(
        &self,
        _program: &OsStr,
        _args: &[OsString],
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = {
            let mut replayer = self.replayer.lock().expect("replayer lock poisoned");
            let interaction = replayer.next_interaction("command", "run");
            interaction.output.clone()
        };
        extract_result(&output, "command::run")
    }
}

//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapters::replaying::{ReplayingCommandExecutor, ReplayingFileSystem};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::ports::command::{CommandExecutor, CommandOutput};
use crate::ports::filesystem::FileSystem;

/// Bundles the port trait objects a trimming run needs.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Executor used to start the trimming tool.
    pub command: Box<dyn CommandExecutor>,
    /// Filesystem used to absolutize the adapters path and remove outputs.
    pub fs: Box<dyn FileSystem>,
}

impl ServiceContext {
    /// Creates a live context that spawns real processes and touches real disk.
    #[must_use]
    pub fn live() -> Self {
        use crate::adapters::live::command::LiveCommandExecutor;
        use crate::adapters::live::filesystem::LiveFileSystem;

        Self { command: Box::new(LiveCommandExecutor), fs: Box::new(LiveFileSystem) }
    }

    /// Creates a context from explicit adapters.
    #[must_use]
    pub fn new(command: Box<dyn CommandExecutor>, fs: Box<dyn FileSystem>) -> Self {
        Self { command, fs }
    }

    /// Creates a recording context backed by live adapters.
    ///
    /// Every interaction is captured into per-port cassettes under
    /// `root/<timestamp>/`. Drop the context, then call
    /// [`RecordingSession::finish`] to write the files.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette directory cannot be created.
    pub fn recording_at(root: &Path) -> Result<(Self, RecordingSession), String> {
        use crate::adapters::live::command::LiveCommandExecutor;
        use crate::adapters::live::filesystem::LiveFileSystem;
        use crate::adapters::recording::{RecordingCommandExecutor, RecordingFileSystem};

        let session = RecordingSession::new(root)?;
        let ctx = Self {
            command: Box::new(RecordingCommandExecutor::new(
                Box::new(LiveCommandExecutor),
                Arc::clone(&session.command),
            )),
            fs: Box::new(RecordingFileSystem::new(
                Box::new(LiveFileSystem),
                Arc::clone(&session.fs),
            )),
        };
        Ok((ctx, session))
    }

    /// Creates a replaying context from a single cassette holding every port.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        let cassette: crate::cassette::format::Cassette = serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))?;

        // Each port gets its own replayer so per-port cursors are independent.
        Ok(Self {
            command: Box::new(ReplayingCommandExecutor::new(CassetteReplayer::new(&cassette))),
            fs: Box::new(ReplayingFileSystem::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// Ports without a configured cassette use a panicking adapter that
    /// fails with a clear message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            command: match replayers.command {
                Some(r) => Box::new(ReplayingCommandExecutor::new(r)),
                None => Box::new(PanickingCommandExecutor),
            },
            fs: match replayers.fs {
                Some(r) => Box::new(ReplayingFileSystem::new(r)),
                None => Box::new(PanickingFileSystem),
            },
        })
    }
}

// --- Panicking adapters for unspecified ports ---

struct PanickingCommandExecutor;
impl CommandExecutor for PanickingCommandExecutor {
    fn run(
        &self,
        _program: &std::ffi::OsStr,
        _args: &[std::ffi::OsString],
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        panic!("CommandExecutor port not configured in CassetteConfig: no cassette loaded for command");
    }
}

struct PanickingFileSystem;
impl FileSystem for PanickingFileSystem {
    fn absolute(&self, _path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
    fn remove_file(&self, _path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        panic!("FileSystem port not configured in CassetteConfig: no cassette loaded for fs");
    }
}

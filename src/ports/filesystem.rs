//! Filesystem port for the path operations the runner needs.

use std::path::{Path, PathBuf};

/// Provides the filesystem operations used around a trimming run.
///
/// Abstracting the filesystem allows deterministic replay and testing
/// without touching the real disk.
pub trait FileSystem: Send + Sync {
    /// Resolves `path` against the current working directory.
    ///
    /// The path does not need to exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty or the working directory cannot
    /// be determined.
    fn absolute(&self, path: &Path) -> Result<PathBuf, Box<dyn std::error::Error + Send + Sync>>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be removed.
    fn remove_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

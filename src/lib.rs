//! Core library entry for the `pairtrim` CLI.
//!
//! `pairtrim` wraps a paired-end read trimmer: it builds the tool's argument
//! vector, runs it once, and removes the unpaired outputs the caller has no
//! use for. Side effects go through the [`ports`] traits so tests can replay
//! recorded interactions instead of spawning processes.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod ports;
pub mod trim;

pub use error::TrimError;
pub use trim::{run_trimming, TrimJob, TrimmedPair};

use clap::error::ErrorKind;
use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}

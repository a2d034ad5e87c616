//! Port traits defining external boundaries.
//!
//! The trimming run touches the outside world in exactly two ways: it starts
//! the external trimmer and it tidies up files afterwards. Each is a trait
//! here; implementations live in `src/adapters/`.

pub mod command;
pub mod filesystem;

pub use command::{CommandExecutor, CommandOutput};
pub use filesystem::FileSystem;

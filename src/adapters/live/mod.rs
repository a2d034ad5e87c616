//! Live adapters for real external interactions.

pub mod command;
pub mod filesystem;

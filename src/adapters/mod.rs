//! Adapter implementations of the port traits.
//!
//! - `live` talks to the real operating system.
//! - `recording` wraps another adapter and writes every interaction to a cassette.
//! - `replaying` serves interactions back from a cassette, for tests.

pub mod live;
pub mod recording;
pub mod replaying;

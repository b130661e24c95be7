//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. The four probe
//! subcommands share [`probe::ProbeCommand`] and differ only in the sequence
//! they build.

pub mod completions;
pub mod dispatcher;
pub mod modules;
pub mod probe;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

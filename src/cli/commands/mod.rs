//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`]. Running `relcheck`
//! with no subcommand is the same as `relcheck generate`.

pub mod completions;
pub mod config;
pub mod dispatcher;
pub mod generate;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

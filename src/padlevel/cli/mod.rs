//! # CLI Layer
//!
//! One possible client for the padlevel library. This is the only place that
//! parses arguments, writes to stdout/stderr, and decides exit codes.
//!
//! Running `padlevel` with no subcommand renders the configured padding.
//!
//! ## Module Structure
//!
//! - `setup`: clap argument definitions
//! - `commands`: dispatch from parsed arguments to the command layer
//! - `print`: terminal output for `CmdResult`s

mod commands;
mod print;
pub mod setup;

pub use commands::run;

//! # padlevel
//!
//! Multi-level indentation padding. The core is [`padding::Padding`], a small
//! accumulator mapping levels to widths and rendering them as a repeated unit.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - clap parsing, colored output, exit codes                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Build a padder from config + options                     │
//! │  - Return `CmdResult`, never print                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (padding.rs, config.rs)                               │
//! │  - `Padding` accumulator and its `Padder` trait             │
//! │  - JSON settings file                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`padding`]: The accumulator, render modes, constants
//! - [`commands`]: `render`, `table`, `config` commands
//! - [`config`]: Settings stored in `config.json`
//! - [`error`]: Error types
//! - [`logging`]: `tracing` subscriber setup

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod padding;

//! CLI module for the tfsum tool.
//!
//! This module defines the command-line surface. All analysis and rendering
//! logic lives in the core modules; the CLI only wires files, flags, and
//! exit codes to them.

mod commands;

pub use commands::{Cli, Commands};

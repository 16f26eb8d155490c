//! CLI module organization.
//!
//! - args: argument structures and value enums
//! - commands: command execution, config-file merging and report output

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;

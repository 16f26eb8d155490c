//! CLI command implementations.
//!
//! - generate: discovery, header emission and report output

pub mod generate;

pub use generate::generate_command;

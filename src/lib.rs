//! # pkginfo-rs: `package-info.java` scaffolding
//!
//! Walks a Java source tree and writes a `package-info.java` for every package
//! directory that lacks one. Each header carries a one-line description derived
//! from the package name, a breakdown of the declarations found in it, and a
//! short list of those declarations with the first line of their Javadoc.
//!
//! ## Architecture
//!
//! ```text
//! discovery ──► analysis ──► category ──► description ──► header ──► emit
//!                                                   naming ─────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pkginfo_rs::{run_generation, GeneratorConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut config = GeneratorConfig::new("./my-app".into());
//!     config.dry_run = true;
//!
//!     let report = run_generation(&config)?;
//!     println!("{} header(s) would be created", report.created());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

// Configuration and error types shared by every module
pub mod core {
    //! Configuration and error handling.

    pub mod config;
    pub mod errors;
}

pub mod package_info;

pub use crate::core::config::{GeneratorConfig, Locale, DEFAULT_SRC_ROOT};
pub use crate::core::errors::{PkgInfoError, Result};
pub use crate::package_info::{
    render_json, render_text, run_generation, EmitOutcome, GenerationReport, PackageOutcome,
};

//! Header file emission.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use super::discovery::PACKAGE_INFO_FILE;
use super::header::render_header;
use super::naming::package_name;
use crate::core::config::GeneratorConfig;
use crate::core::errors::{PkgInfoError, Result};

/// What happened to one package directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmitOutcome {
    /// The header was written.
    Created,
    /// Dry run: the header would have been written.
    WouldCreate,
    /// A header already existed and `force` was off.
    Skipped,
}

impl EmitOutcome {
    /// True when the header was (or would have been) written.
    pub fn is_written(self) -> bool {
        !matches!(self, Self::Skipped)
    }
}

/// Result of processing one package directory.
#[derive(Debug, Clone, Serialize)]
pub struct PackageOutcome {
    /// Package directory.
    pub dir: PathBuf,
    /// Derived dotted package name.
    pub package: String,
    /// Path of the header file.
    pub target: PathBuf,
    /// Action taken.
    pub outcome: EmitOutcome,
}

/// Path of the header file inside `package_dir`.
pub fn target_path(package_dir: &Path) -> PathBuf {
    package_dir.join(PACKAGE_INFO_FILE)
}

/// Write the `package-info.java` for one directory.
///
/// An existing header is left alone unless `config.force` is set. Under
/// `config.dry_run` nothing on disk is touched.
pub fn emit_package_info(package_dir: &Path, config: &GeneratorConfig) -> Result<PackageOutcome> {
    let target = target_path(package_dir);
    let package = package_name(package_dir, &config.src_root);
    let mut outcome = PackageOutcome {
        dir: package_dir.to_path_buf(),
        package,
        target,
        outcome: EmitOutcome::Skipped,
    };

    if outcome.target.exists() && !config.force {
        debug!(target = %outcome.target.display(), "header already exists, skipping");
        return Ok(outcome);
    }

    let content = render_header(&outcome.package, Some(package_dir), config.locale)?;

    if config.dry_run {
        info!(
            target = %outcome.target.display(),
            package = %outcome.package,
            "dry run: would create header"
        );
        outcome.outcome = EmitOutcome::WouldCreate;
        return Ok(outcome);
    }

    fs::write(&outcome.target, content)
        .map_err(|err| PkgInfoError::io_at("Failed to write", &outcome.target, err))?;
    debug!(target = %outcome.target.display(), package = %outcome.package, "wrote header");
    outcome.outcome = EmitOutcome::Created;
    Ok(outcome)
}

#[cfg(test)]
#[path = "emit_tests.rs"]
mod tests;

//! Configuration for package-info generation.
//!
//! [`GeneratorConfig`] is built once at startup and passed by reference through
//! discovery, analysis and emission. Nothing in the generator reads global
//! state besides the static default tables defined here.

use std::collections::HashSet;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::core::errors::{PkgInfoError, Result};

/// Conventional Maven/Gradle source root used to derive package names.
pub const DEFAULT_SRC_ROOT: &str = "src/main/java";

/// Build-output directory names pruned from the walk by default.
static DEFAULT_IGNORED_DIR_NAMES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["target", "build", "out"].into_iter().collect());

/// Natural-language variant of the generated headers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Japanese templates.
    #[default]
    Ja,
    /// English templates.
    En,
}

/// Configuration for a generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Root directory to scan.
    pub root: PathBuf,
    /// Optional dotted package prefix used to filter discovered directories.
    pub base_package: Option<String>,
    /// Source-root marker used to derive package names.
    pub src_root: String,
    /// Overwrite existing `package-info.java` files.
    pub force: bool,
    /// Report intended actions without writing.
    pub dry_run: bool,
    /// Template language.
    pub locale: Locale,
    /// Directory names pruned from the walk, in addition to hidden ones.
    pub ignore_dirs: HashSet<String>,
    /// Root-relative glob patterns pruned from the walk.
    pub ignore_globs: Vec<String>,
}

impl GeneratorConfig {
    /// Create a new configuration with defaults for the given root.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            base_package: None,
            src_root: DEFAULT_SRC_ROOT.to_string(),
            force: false,
            dry_run: false,
            locale: Locale::default(),
            ignore_dirs: DEFAULT_IGNORED_DIR_NAMES
                .iter()
                .map(|item| item.to_string())
                .collect(),
            ignore_globs: Vec::new(),
        }
    }

    /// Check that the configuration can drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.src_root.trim().is_empty() {
            return Err(PkgInfoError::config_field(
                "source-root marker must not be empty",
                "src_root",
            ));
        }
        if let Some(base) = &self.base_package {
            if base.trim().is_empty() {
                return Err(PkgInfoError::config_field(
                    "base package filter must not be empty",
                    "base_package",
                ));
            }
        }
        Ok(())
    }
}

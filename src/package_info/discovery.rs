//! Package directory discovery.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf, MAIN_SEPARATOR_STR};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::GeneratorConfig;
use crate::core::errors::{PkgInfoError, Result};

/// Reserved file name of the generated header.
pub const PACKAGE_INFO_FILE: &str = "package-info.java";

/// Extension of the source files that make a directory a package.
pub const SOURCE_EXTENSION: &str = "java";

/// Find every directory under the configured root that holds Java sources.
///
/// The result is sorted. Hidden directories, ignored directory names and
/// ignore-glob matches are pruned together with everything beneath them.
pub fn find_package_dirs(config: &GeneratorConfig) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(&config.root)
        .map_err(|err| PkgInfoError::io_at("Failed to resolve root", &config.root, err))?;
    let globset = build_ignore_globset(&config.ignore_globs)?;
    let package_filter = config
        .base_package
        .as_deref()
        .map(|base| base.replace('.', MAIN_SEPARATOR_STR));

    let mut packages = BTreeSet::new();
    let walker = WalkDir::new(&root)
        .into_iter()
        .filter_entry(|entry| !should_prune(entry, &root, config, &globset));

    for entry in walker {
        let entry = entry.map_err(|source| PkgInfoError::Walk {
            root: root.clone(),
            source,
        })?;
        // Symlinked sources count; `is_file` follows the link
        if entry.file_type().is_dir() || !entry.path().is_file() || !is_source_file(entry.path()) {
            continue;
        }
        let Some(dir) = entry.path().parent() else {
            continue;
        };
        if let Some(filter) = &package_filter {
            if !dir.to_string_lossy().contains(filter.as_str()) {
                continue;
            }
        }
        if packages.insert(dir.to_path_buf()) {
            debug!(dir = %dir.display(), "discovered package directory");
        }
    }

    info!(count = packages.len(), root = %root.display(), "package discovery finished");
    Ok(packages.into_iter().collect())
}

/// True for `.java` files other than the generated header.
pub fn is_source_file(path: &Path) -> bool {
    let is_java = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == SOURCE_EXTENSION)
        .unwrap_or(false);
    let is_header = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(|name| name == PACKAGE_INFO_FILE)
        .unwrap_or(false);
    is_java && !is_header
}

fn should_prune(entry: &DirEntry, root: &Path, config: &GeneratorConfig, globset: &GlobSet) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') || config.ignore_dirs.contains(&*name) {
        return true;
    }
    let rel = entry.path().strip_prefix(root).unwrap_or(entry.path());
    globset.is_match(rel)
}

fn build_ignore_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern).map_err(|source| PkgInfoError::Pattern {
            pattern: pattern.clone(),
            source,
        })?;
        builder.add(glob);
    }
    builder.build().map_err(|source| PkgInfoError::Pattern {
        pattern: patterns.join(", "),
        source,
    })
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;

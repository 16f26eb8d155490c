//! Generation command implementation.
//!
//! Merges command-line flags with the optional YAML config file, runs the
//! generator and prints the report.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use crate::cli::args::{Cli, ReportFormat};
use pkginfo_rs::{package_info, GeneratorConfig, Locale};

/// Config file names picked up from the working directory.
const IMPLICIT_CONFIG_FILES: [&str; 2] = [".pkginfo.yml", ".pkginfo.yaml"];

/// Optional YAML configuration for the generator.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub base_package: Option<String>,
    pub src_root: Option<String>,
    pub lang: Option<Locale>,
    #[serde(default)]
    pub ignore_dir: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

/// Run the generator for the parsed command line.
pub fn generate_command(cli: Cli) -> anyhow::Result<()> {
    let file_config = find_config_file(&cli.config)?;
    let root = resolve_root(&cli.directory)?;
    let config = build_config(root, &cli, file_config);

    let report = package_info::run_generation(&config)?;
    match cli.format {
        ReportFormat::Text => print!("{}", package_info::render_text(&report)),
        ReportFormat::Json => println!("{}", package_info::render_json(&report)?),
    }
    Ok(())
}

/// Load generator settings from a YAML file.
pub fn load_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;
    serde_yaml::from_str(&contents)
        .with_context(|| format!("Failed to parse config {}", path.display()))
}

/// Find and load the config file from an explicit path or implicit locations.
pub fn find_config_file(explicit_path: &Option<PathBuf>) -> anyhow::Result<Option<ConfigFile>> {
    let implicit_config = IMPLICIT_CONFIG_FILES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.exists());

    match explicit_path.clone().or(implicit_config) {
        Some(path) => Ok(Some(load_config_file(&path)?)),
        None => Ok(None),
    }
}

/// Resolve and validate the root directory.
pub fn resolve_root(cli_root: &Path) -> anyhow::Result<PathBuf> {
    if !cli_root.exists() {
        anyhow::bail!("Root directory does not exist: {}", cli_root.display());
    }

    let root = std::fs::canonicalize(cli_root)
        .with_context(|| format!("Failed to resolve root {}", cli_root.display()))?;

    if !root.is_dir() {
        anyhow::bail!("Root must be a directory: {}", root.display());
    }

    Ok(root)
}

/// Combine defaults, config file and flags; flags win.
pub fn build_config(root: PathBuf, cli: &Cli, file_config: Option<ConfigFile>) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(root);
    let file_cfg = file_config.unwrap_or_default();

    // A blank filter means no filter
    config.base_package = cli
        .base_package
        .clone()
        .or(file_cfg.base_package)
        .filter(|base| !base.trim().is_empty());
    if let Some(src_root) = cli.src_root.clone().or(file_cfg.src_root) {
        config.src_root = src_root;
    }
    if let Some(locale) = cli.lang.map(Locale::from).or(file_cfg.lang) {
        config.locale = locale;
    }
    config.force = cli.force;
    config.dry_run = cli.dry_run;

    extend_ignore_set(&mut config.ignore_dirs, file_cfg.ignore_dir);
    extend_ignore_set(&mut config.ignore_dirs, cli.ignore_dir.clone());
    extend_ignore_vec(&mut config.ignore_globs, file_cfg.ignore);
    extend_ignore_vec(&mut config.ignore_globs, cli.ignore.clone());

    config
}

/// Extend a HashSet with non-empty trimmed strings.
fn extend_ignore_set(set: &mut HashSet<String>, items: Vec<String>) {
    for item in items {
        if !item.trim().is_empty() {
            set.insert(item.trim().to_string());
        }
    }
}

/// Extend a Vec with non-empty trimmed strings.
fn extend_ignore_vec(vec: &mut Vec<String>, items: Vec<String>) {
    for item in items {
        if !item.trim().is_empty() {
            vec.push(item.trim().to_string());
        }
    }
}

//! CLI argument definitions for the pkginfo binary.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use pkginfo_rs::Locale;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate package-info.java files for Java packages
#[derive(Parser, Debug)]
#[command(name = "pkginfo")]
#[command(version = VERSION)]
#[command(about = "Generate package-info.java files for Java packages")]
#[command(long_about = "
Walk a Java source tree and write a package-info.java with a generated
Javadoc description into every package directory that lacks one.

Common Usage:

  # Preview what would be written
  pkginfo --dry-run ./my-app

  # Only packages under com.example, English descriptions
  pkginfo --base-package com.example --lang en ./my-app

  # Regenerate every header
  pkginfo --force ./my-app
")]
pub struct Cli {
    /// Root directory to search for Java packages
    pub directory: PathBuf,

    /// Base package to filter (e.g., com.example.myapp)
    #[arg(long)]
    pub base_package: Option<String>,

    /// Source root directory [default: src/main/java]
    #[arg(long)]
    pub src_root: Option<String>,

    /// Overwrite existing package-info.java files
    #[arg(long)]
    pub force: bool,

    /// Show what would be created without creating files
    #[arg(long)]
    pub dry_run: bool,

    /// Language of the generated descriptions [default: ja]
    #[arg(long, value_enum)]
    pub lang: Option<LangArg>,

    /// Console report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Additional directory names to skip (repeatable)
    #[arg(long = "ignore-dir", value_name = "NAME")]
    pub ignore_dir: Vec<String>,

    /// Glob patterns (relative to the root) to skip (repeatable)
    #[arg(long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// YAML config file (defaults to .pkginfo.yml when present)
    #[arg(long, env = "PKGINFO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Template language selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LangArg {
    /// Japanese
    Ja,
    /// English
    En,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::Ja => Locale::Ja,
            LangArg::En => Locale::En,
        }
    }
}

/// Output format for the run report.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable status lines
    Text,
    /// JSON summary
    Json,
}

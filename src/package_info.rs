//! `package-info.java` generation.
//!
//! Walks a source tree, finds directories holding Java sources, infers a short
//! description of each package from its name and contents, and writes a
//! `package-info.java` header next to the sources. Existing headers are kept
//! unless forced, so reruns are idempotent and an interrupted run can simply
//! be restarted.

pub mod analysis;
pub mod category;
pub mod description;
pub mod discovery;
pub mod emit;
pub mod header;
pub mod naming;

use serde::Serialize;
use tracing::info;

use crate::core::config::GeneratorConfig;
use crate::core::errors::Result;

pub use analysis::{analyze_directory, analyze_source_file, DeclarationKind, SourceUnitSummary};
pub use category::PackageCategory;
pub use description::describe_package;
pub use discovery::{find_package_dirs, PACKAGE_INFO_FILE};
pub use emit::{emit_package_info, EmitOutcome, PackageOutcome};
pub use header::{render_header, MAX_LISTED_UNITS};
pub use naming::package_name;

/// Outcome of a whole generation run.
#[derive(Debug, Serialize)]
pub struct GenerationReport {
    /// Whether the run was a dry run.
    pub dry_run: bool,
    /// Per-package outcomes in processing order.
    pub packages: Vec<PackageOutcome>,
}

impl GenerationReport {
    /// Headers written, or that would have been written in a dry run.
    pub fn created(&self) -> usize {
        self.packages
            .iter()
            .filter(|package| package.outcome.is_written())
            .count()
    }

    /// Packages left untouched because a header already existed.
    pub fn skipped(&self) -> usize {
        self.total() - self.created()
    }

    /// Number of package directories processed.
    pub fn total(&self) -> usize {
        self.packages.len()
    }
}

#[derive(Serialize)]
struct ReportSummary<'a> {
    dry_run: bool,
    created: usize,
    skipped: usize,
    total: usize,
    packages: &'a [PackageOutcome],
}

/// Run discovery and emission for every package under `config.root`.
///
/// Directories are processed in sorted path order. A write failure aborts the
/// run; headers written before it stay on disk.
pub fn run_generation(config: &GeneratorConfig) -> Result<GenerationReport> {
    config.validate()?;
    let package_dirs = find_package_dirs(config)?;

    let mut packages = Vec::with_capacity(package_dirs.len());
    for dir in &package_dirs {
        packages.push(emit_package_info(dir, config)?);
    }

    let report = GenerationReport {
        dry_run: config.dry_run,
        packages,
    };
    info!(
        created = report.created(),
        skipped = report.skipped(),
        total = report.total(),
        "generation finished"
    );
    Ok(report)
}

/// Render a run report as console text.
pub fn render_text(report: &GenerationReport) -> String {
    if report.packages.is_empty() {
        return "No Java packages found.\n".to_string();
    }

    let mut output = format!("Found {} Java package(s)\n\n", report.total());
    for package in &report.packages {
        let line = match package.outcome {
            EmitOutcome::Created => format!("✅ Created: {}", package.package),
            EmitOutcome::WouldCreate => format!(
                "✅ Would create: {} ({})",
                package.package,
                package.target.display()
            ),
            EmitOutcome::Skipped => format!("⏭️  Skipped: {} (already exists)", package.package),
        };
        output.push_str(&line);
        output.push('\n');
    }

    output.push_str(&format!(
        "\nSummary:\n  Created: {}\n  Skipped: {}\n  Total: {}\n",
        report.created(),
        report.skipped(),
        report.total()
    ));
    output
}

/// Render a run report as pretty-printed JSON.
pub fn render_json(report: &GenerationReport) -> Result<String> {
    let summary = ReportSummary {
        dry_run: report.dry_run,
        created: report.created(),
        skipped: report.skipped(),
        total: report.total(),
        packages: &report.packages,
    };
    Ok(serde_json::to_string_pretty(&summary)?)
}

#[cfg(test)]
#[path = "package_info_tests.rs"]
mod tests;

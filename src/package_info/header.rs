//! `package-info.java` content rendering.

use std::path::Path;

use super::analysis::{analyze_directory, SourceUnitSummary};
use super::category::PackageCategory;
use super::description::{describe_package, title_case};
use super::naming::last_segment;
use crate::core::config::Locale;
use crate::core::errors::Result;

/// Maximum number of declarations listed in a header.
pub const MAX_LISTED_UNITS: usize = 10;

/// Render the full header for `package_name`.
///
/// With an existing `package_dir` the directory is analyzed and the header
/// carries the synthesized description plus a sorted list of declarations.
/// Without one, a generic two-sentence description is used instead.
pub fn render_header(package_name: &str, package_dir: Option<&Path>, locale: Locale) -> Result<String> {
    match package_dir.filter(|dir| dir.exists()) {
        Some(dir) => {
            let units = analyze_directory(dir)?;
            let category = PackageCategory::classify(dir);
            Ok(render_analyzed(package_name, &units, category, locale))
        }
        None => Ok(render_fallback(package_name, locale)),
    }
}

/// Render a header from units that were already analyzed.
pub fn render_analyzed(
    package_name: &str,
    units: &[SourceUnitSummary],
    category: PackageCategory,
    locale: Locale,
) -> String {
    let description = describe_package(package_name, units, category, locale);
    let mut lines = vec![
        "/**".to_string(),
        format!(" * {description}"),
        " *".to_string(),
    ];

    if !units.is_empty() {
        let mut sorted: Vec<&SourceUnitSummary> = units.iter().collect();
        sorted.sort_by(|a, b| a.name.cmp(&b.name));

        lines.push(format!(" * <p>{}</p>", list_label(locale)));
        lines.push(" * <ul>".to_string());
        for unit in sorted.iter().take(MAX_LISTED_UNITS) {
            match &unit.summary {
                Some(summary) => lines.push(format!(" *   <li>{}: {}</li>", unit.name, summary)),
                None => lines.push(format!(" *   <li>{}</li>", unit.name)),
            }
        }
        if units.len() > MAX_LISTED_UNITS {
            let remaining = units.len() - MAX_LISTED_UNITS;
            lines.push(format!(" *   <li>{}</li>", overflow_note(remaining, locale)));
        }
        lines.push(" * </ul>".to_string());
    }

    lines.push(" */".to_string());
    lines.push(format!("package {package_name};"));

    let mut content = lines.join("\n");
    content.push('\n');
    content
}

/// Render the generic header used when no directory can be analyzed.
pub fn render_fallback(package_name: &str, locale: Locale) -> String {
    let title = title_case(&last_segment(package_name).replace('_', " "));
    let (headline, body) = match locale {
        Locale::Ja => (
            format!("{title}パッケージ"),
            format!("このパッケージは{title}に関連する機能を提供します。"),
        ),
        Locale::En => (
            format!("{title} package"),
            format!("This package provides functionality related to {title}."),
        ),
    };
    format!("/**\n * {headline}\n *\n * <p>{body}</p>\n */\npackage {package_name};\n")
}

fn list_label(locale: Locale) -> &'static str {
    match locale {
        Locale::Ja => "主なクラス:",
        Locale::En => "Main classes:",
    }
}

fn overflow_note(remaining: usize, locale: Locale) -> String {
    match locale {
        Locale::Ja => format!("... 他 {remaining} クラス"),
        Locale::En => format!("... and {remaining} more"),
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;

//! Lightweight source-unit analysis.
//!
//! Two regular expressions pull the first public top-level declaration and the
//! first Javadoc block out of a file. This is a pattern matcher, not a parser:
//! the first doc comment wins even when it belongs to a member rather than the
//! type.

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::{debug, warn};

use super::discovery::is_source_file;
use crate::core::errors::{PkgInfoError, Result};

static DECLARATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"public\s+(class|interface|enum|record|@interface)\s+(\w+)")
        .expect("declaration pattern is valid")
});

static JAVADOC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*\*\s*\n(.*?)\*/").expect("javadoc pattern is valid"));

/// Kind of a top-level Java declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `enum`
    Enum,
    /// `record`
    Record,
    /// `@interface`
    AnnotationType,
}

impl DeclarationKind {
    /// Map a declaration keyword to its kind.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(Self::Class),
            "interface" => Some(Self::Interface),
            "enum" => Some(Self::Enum),
            "record" => Some(Self::Record),
            "@interface" => Some(Self::AnnotationType),
            _ => None,
        }
    }

    /// Java keyword for this kind.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Interface => "interface",
            Self::Enum => "enum",
            Self::Record => "record",
            Self::AnnotationType => "@interface",
        }
    }
}

/// What was extracted from one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceUnitSummary {
    /// Declared type name, or the file stem when no declaration matched.
    pub name: String,
    /// Declaration kind, when a public declaration was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<DeclarationKind>,
    /// First content line of the first Javadoc block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Analyze a single source file.
///
/// Unreadable files are logged and yield `None` so the run can continue.
pub fn analyze_source_file(path: &Path) -> Option<SourceUnitSummary> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "skipping unreadable source file");
            return None;
        }
    };
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    let unit = parse_source_unit(&contents, &stem);
    debug!(
        path = %path.display(),
        name = %unit.name,
        kind = unit.kind.map(DeclarationKind::keyword).unwrap_or("-"),
        "analyzed source file"
    );
    Some(unit)
}

/// Extract declaration and doc summary from source text.
pub fn parse_source_unit(source: &str, fallback_name: &str) -> SourceUnitSummary {
    let mut unit = SourceUnitSummary {
        name: fallback_name.to_string(),
        kind: None,
        summary: None,
    };

    if let Some(caps) = DECLARATION_RE.captures(source) {
        unit.kind = DeclarationKind::from_keyword(&caps[1]);
        unit.name = caps[2].to_string();
    }

    if let Some(caps) = JAVADOC_RE.captures(source) {
        unit.summary = first_doc_line(&caps[1]);
    }

    unit
}

fn first_doc_line(body: &str) -> Option<String> {
    body.lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .find(|line| !line.is_empty() && !line.starts_with('@'))
        .map(str::to_string)
}

/// Analyze every source file directly inside `package_dir`.
///
/// Units are returned in directory-listing order; callers sort as needed.
pub fn analyze_directory(package_dir: &Path) -> Result<Vec<SourceUnitSummary>> {
    let entries = fs::read_dir(package_dir)
        .map_err(|err| PkgInfoError::io_at("Failed to read directory", package_dir, err))?;

    let mut units = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|err| PkgInfoError::io_at("Failed to read entry in", package_dir, err))?;
        let path = entry.path();
        if !path.is_file() || !is_source_file(&path) {
            continue;
        }
        if let Some(unit) = analyze_source_file(&path) {
            units.push(unit);
        }
    }

    Ok(units)
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;

//! Package classification by directory name.

use std::path::Path;

use serde::Serialize;

/// Heuristic role of a package, taken from its final path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageCategory {
    /// Data models and entities.
    Entity,
    /// Data-access mappers, DAOs and repositories.
    Mapper,
    /// Business-logic services.
    Service,
    /// Request-handling controllers.
    Controller,
    /// Utilities and helpers.
    Util,
    /// Application configuration.
    Config,
    /// Data transfer objects.
    Dto,
    /// Exceptions and error handling.
    Exception,
    /// Anything else.
    General,
}

static SYNONYMS: [(PackageCategory, &[&str]); 8] = [
    (
        PackageCategory::Entity,
        &["entity", "entities", "model", "models", "domain"],
    ),
    (
        PackageCategory::Mapper,
        &["mapper", "mappers", "dao", "repository", "repositories"],
    ),
    (PackageCategory::Service, &["service", "services"]),
    (
        PackageCategory::Controller,
        &["controller", "controllers", "rest", "api"],
    ),
    (
        PackageCategory::Util,
        &["util", "utils", "utility", "utilities", "helper", "helpers"],
    ),
    (
        PackageCategory::Config,
        &["config", "configuration", "settings"],
    ),
    (PackageCategory::Dto, &["dto", "dtos", "vo", "vos"]),
    (
        PackageCategory::Exception,
        &["exception", "exceptions", "error", "errors"],
    ),
];

impl PackageCategory {
    /// Classify a package directory by its final path segment.
    pub fn classify(package_dir: &Path) -> Self {
        package_dir
            .file_name()
            .map(|name| Self::from_segment(&name.to_string_lossy()))
            .unwrap_or(Self::General)
    }

    /// Classify a single path segment; matching is exact after lowercasing.
    pub fn from_segment(segment: &str) -> Self {
        let lowered = segment.to_lowercase();
        SYNONYMS
            .iter()
            .find(|(_, names)| names.contains(&lowered.as_str()))
            .map(|(category, _)| *category)
            .unwrap_or(Self::General)
    }
}

//! Error types for the pkginfo-rs library.
//!
//! Library operations return [`Result`], whose error type keeps the offending
//! path or pattern alongside the underlying cause so the binary can print a
//! useful diagnostic before exiting.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main result type for pkginfo operations.
pub type Result<T> = std::result::Result<T, PkgInfoError>;

/// Error type for all pkginfo operations.
#[derive(Error, Debug)]
pub enum PkgInfoError {
    /// I/O errors (directory listing, header writes)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Path involved in the failed operation
        path: Option<PathBuf>,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Directory walk errors, including a missing root
    #[error("Failed to walk {}: {source}", .root.display())]
    Walk {
        /// Root the walk started from
        root: PathBuf,
        /// Underlying walkdir error
        #[source]
        source: walkdir::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Invalid ignore glob
    #[error("Invalid ignore pattern '{pattern}': {source}")]
    Pattern {
        /// Offending glob
        pattern: String,
        /// Underlying globset error
        #[source]
        source: globset::Error,
    },

    /// Report serialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PkgInfoError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            path: None,
            source,
        }
    }

    /// Create a new I/O error tied to a filesystem path
    pub fn io_at(message: impl Into<String>, path: &Path, source: io::Error) -> Self {
        Self::Io {
            message: format!("{} {}", message.into(), path.display()),
            path: Some(path.to_path_buf()),
            source,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Path associated with the error, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            Self::Walk { root, .. } => Some(root.as_path()),
            _ => None,
        }
    }
}

impl From<io::Error> for PkgInfoError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for PkgInfoError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            source: Some(Box::new(err)),
        }
    }
}

//! Unified error types for sbom-convert.
//!
//! Fatal conversion errors carry the offending BOM reference so a failed run
//! can be diagnosed without re-running with verbose logging.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for conversion operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConvertError {
    /// The same BOM reference was seen twice in the component tree.
    #[error("duplicate BOM reference {reference:?}")]
    DuplicateReference { reference: String },

    /// A dependency entry names a source reference that was never mapped.
    #[error("dependency source references unknown component {reference:?}")]
    DanglingSourceReference { reference: String },

    /// A dependency entry names a target reference that was never mapped.
    #[error("dependency target references unknown component {reference:?}")]
    DanglingTargetReference { reference: String },

    /// IO errors with path context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON decode/encode errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl ConvertError {
    /// Create a duplicate-reference error
    pub fn duplicate_reference(reference: impl Into<String>) -> Self {
        Self::DuplicateReference {
            reference: reference.into(),
        }
    }

    /// Create a dangling-source-reference error
    pub fn dangling_source(reference: impl Into<String>) -> Self {
        Self::DanglingSourceReference {
            reference: reference.into(),
        }
    }

    /// Create a dangling-target-reference error
    pub fn dangling_target(reference: impl Into<String>) -> Self {
        Self::DanglingTargetReference {
            reference: reference.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// The BOM reference this error is about, if any.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Self::DuplicateReference { reference }
            | Self::DanglingSourceReference { reference }
            | Self::DanglingTargetReference { reference } => Some(reference),
            Self::Io { .. } | Self::Json(_) => None,
        }
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Convenient Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;

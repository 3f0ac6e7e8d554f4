//! Typed error handling for tipcheck.
//!
//! Provides structured errors that library consumers can match on,
//! with full context about what went wrong and where.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tipcheck operations.
#[derive(Error, Debug)]
pub enum TipcheckError {
    /// The tooltip definitions module does not exist
    #[error("Tooltips file not found at {}", path.display())]
    DefinitionsNotFound { path: PathBuf },

    /// I/O error when reading files
    #[error("I/O error at {path}: {message}")]
    Io {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Configuration file errors
    #[error("Config error at {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// A detection pattern could not be compiled
    #[error("Pattern error: {message}")]
    Pattern { message: String },

    /// The version-control file index could not be queried
    #[error("File index unavailable: {message}")]
    Index { message: String },
}

impl TipcheckError {
    /// Create a missing-definitions error for the expected path.
    pub fn definitions_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DefinitionsNotFound { path: path.into() }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
            source: Some(err),
        }
    }

    /// Create a config error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a pattern error.
    pub fn pattern(message: impl Into<String>) -> Self {
        Self::Pattern {
            message: message.into(),
        }
    }

    /// Create a file index error.
    pub fn index(message: impl Into<String>) -> Self {
        Self::Index {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error (the run can continue).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Index { .. })
    }

    /// Get the path associated with this error, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::DefinitionsNotFound { path } => Some(path),
            Self::Io { path, .. } => Some(path),
            Self::Config { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Convenience type alias for tipcheck results.
pub type TipcheckResult<T> = Result<T, TipcheckError>;

/// Extension trait for converting std::io::Error with path context.
pub trait IoResultExt<T> {
    /// Add path context to an I/O error.
    fn with_path(self, path: impl Into<PathBuf>) -> TipcheckResult<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> TipcheckResult<T> {
        self.map_err(|e| TipcheckError::io(path, e))
    }
}

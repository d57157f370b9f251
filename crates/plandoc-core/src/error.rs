//! Error types for the plandoc library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all plan document operations.
///
/// Parsing never produces an error: malformed lines degrade to plain task
/// text. Only resolving and reading the source file can fail.
#[derive(Error, Debug)]
pub enum PlanError {
    /// The referenced document does not exist
    #[error("Document '{path}' not found")]
    NotFound { path: PathBuf },
    /// File system operation errors other than a missing file
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Classify an I/O error raised while reading `path`.
    ///
    /// A missing file becomes [`PlanError::NotFound`]; everything else is
    /// reported as [`PlanError::FileSystem`] with the original source.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::FileSystem { path, source }
        }
    }

    /// Returns true when the error means the document does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to PlanError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| PlanError::Configuration {
            message: format!("{}: {}", context, e),
        })
    }
}

/// Result type alias for plan operations
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_missing_file_maps_to_not_found() {
        let err = PlanError::from_io("a/b.plan.md", io::Error::from(io::ErrorKind::NotFound));
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Document 'a/b.plan.md' not found");
    }

    #[test]
    fn test_other_io_errors_keep_source() {
        let err = PlanError::from_io(
            "locked.md",
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(!err.is_not_found());
        assert!(matches!(err, PlanError::FileSystem { .. }));
    }

    #[test]
    fn test_invalid_input_builder() {
        let err = PlanError::invalid_input("path").with_reason("escapes the root");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'path': escapes the root"
        );
    }

    #[test]
    fn test_with_context_wraps_as_configuration() {
        let res: std::result::Result<(), io::Error> = Err(io::Error::other("boom"));
        let err = res.with_context("Task join error").unwrap_err();
        assert_eq!(err.to_string(), "Configuration error: Task join error: boom");
    }
}

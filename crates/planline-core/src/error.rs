//! Error types for the planline library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible planline operation.
///
/// Layout never fails; only loading, saving, configuration and export can
/// produce one of these.
#[derive(Error, Debug)]
pub enum PlanlineError {
    /// Loaded content is not a structured (JSON object) document
    #[error("Invalid plan format: {reason}")]
    InvalidFormat { reason: String },
    /// A required collaborator (drawing surface, ...) is not available
    #[error("{name} is not available")]
    MissingCollaborator { name: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
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
    pub fn with_reason(self, reason: impl Into<String>) -> PlanlineError {
        PlanlineError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanlineError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid format error.
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Creates a missing collaborator error for the named component.
    pub fn missing_collaborator(name: impl Into<String>) -> Self {
        Self::MissingCollaborator { name: name.into() }
    }
}

/// Extension trait attaching a path to IO results.
pub trait IoResultExt<T> {
    /// Map an IO error into [`PlanlineError::FileSystem`] for `path`.
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|source| PlanlineError::FileSystem {
            path: path.into(),
            source,
        })
    }
}

/// Result type alias for planline operations
pub type Result<T> = std::result::Result<T, PlanlineError>;

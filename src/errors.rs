//! Error types for the toolsmith scaffolder and validator.
//!
//! Validation keeps its own failures inside the report; only unusable
//! input (a path that is not an existing directory) surfaces here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for toolsmith operations
#[derive(Error, Debug)]
pub enum ToolsmithError {
    /// The project path handed to the validator does not exist
    #[error("Project path not found: {}", .0.display())]
    ProjectNotFound(PathBuf),

    /// The project path exists but is not a directory
    #[error("Project path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Requested tool id is not in the registry
    #[error("Unknown tool '{0}' (run `toolsmith list` to see available tools)")]
    UnknownTool(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for toolsmith operations
pub type Result<T> = std::result::Result<T, ToolsmithError>;

impl ToolsmithError {
    /// True for the two input conditions that abort validation outright.
    ///
    /// Everything else the validator encounters (unreadable files, broken
    /// JSON, missing artifacts) is recorded as a finding in the report
    /// instead of being returned as an error.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ToolsmithError::ProjectNotFound(_) | ToolsmithError::NotADirectory(_)
        )
    }
}

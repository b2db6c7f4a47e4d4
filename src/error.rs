//! Error types for probing and field access.

use std::path::PathBuf;

/// Errors raised by typed field accessors on a stream record.
///
/// These are per-query failures: a bad `bit_rate` value does not stop the
/// caller from reading `codec_name` off the same record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A field expected to be numeric is present but unparseable.
    #[error("Field '{field}' is not numeric: '{value}'")]
    NonNumeric { field: String, value: String },

    /// A structurally required field is absent from the record.
    #[error("Missing required field '{field}'")]
    Missing { field: String },
}

impl FieldError {
    /// Create a non-numeric field error.
    pub fn non_numeric(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::NonNumeric {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }
}

/// Errors that can occur while probing a media file.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The ffprobe binary is not installed or not on PATH.
    #[error("ffprobe not found or not executable")]
    ToolNotFound,

    /// Input media file does not exist.
    #[error("No such media file: {0}")]
    FileNotFound(PathBuf),

    /// Failed to launch the probing tool.
    #[error("{tool} execution failed: {message}")]
    ExecutionFailed { tool: String, message: String },

    /// The probing tool ran but exited with a failure status.
    #[error("{tool} exited with status {exit_code}: {message}")]
    CommandFailed {
        tool: String,
        exit_code: i32,
        message: String,
    },

    /// Field-level access error, for callers bubbling both kinds.
    #[error("Field error: {0}")]
    Field(#[from] FieldError),
}

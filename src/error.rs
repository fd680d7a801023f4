//! Error types for label generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error classes, used for reporting and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// One or more requested keys matched no registry (1)
    UnrecognizedKey = 1,
    /// Catalog is malformed or inconsistent (2)
    Catalog = 2,
    /// An external tool failed (3)
    Tool = 3,
    /// Filesystem error (4)
    Io = 4,
}

/// Failure of an external process.
#[derive(Debug, Error)]
pub enum ToolErrorKind {
    #[error("could not start: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("exited with {status}: {stderr}")]
    ExitStatus { status: String, stderr: String },
}

/// An external tool invocation that did not succeed.
#[derive(Debug, Error)]
#[error("Command '{command}' failed: {kind}")]
pub struct ToolError {
    /// The command line as it was run.
    pub command: String,
    /// What went wrong.
    #[source]
    pub kind: ToolErrorKind,
}

/// Main error type for label generation.
#[derive(Debug, Error)]
pub enum LabelError {
    #[error("No drawer named {}", quoted(.keys))]
    UnrecognizedKeys { keys: Vec<String> },

    #[error("Drawer '{key}' is defined in both '{first}' and '{second}'")]
    DuplicateKey {
        key: String,
        first: String,
        second: String,
    },

    #[error("Invalid registry '{name}': {message}")]
    InvalidRegistry { name: String, message: String },

    #[error("Failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    #[error("Conversion failed for {}", display_paths(.pages))]
    ConversionFailed { pages: Vec<PathBuf> },

    #[error(transparent)]
    ToolFailed(#[from] ToolError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LabelError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            LabelError::UnrecognizedKeys { .. } => ErrorCode::UnrecognizedKey,
            LabelError::DuplicateKey { .. } => ErrorCode::Catalog,
            LabelError::InvalidRegistry { .. } => ErrorCode::Catalog,
            LabelError::CatalogParse(_) => ErrorCode::Catalog,
            LabelError::ConversionFailed { .. } => ErrorCode::Tool,
            LabelError::ToolFailed(_) => ErrorCode::Tool,
            LabelError::Io(_) => ErrorCode::Io,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

fn quoted(keys: &[String]) -> String {
    keys.iter()
        .map(|k| format!("'{}'", k))
        .collect::<Vec<_>>()
        .join(", ")
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for label operations.
pub type Result<T> = std::result::Result<T, LabelError>;

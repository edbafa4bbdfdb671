//! Error types and exit codes for campath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unknown algorithm)
//! - 3: Data error (unknown location, missing custom path, bad campus file)
//!
//! An unreachable destination is not an error: searches report it as a
//! result without a path.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the campath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown location, invalid campus tables (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during campath operations
#[derive(Error, Debug)]
pub enum CampathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, ucs, a*, or all)")]
    UnknownAlgorithm(String),

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("location not found: {name}")]
    LocationNotFound { name: String },

    #[error("invalid campus data in {path:?}: {reason}")]
    InvalidCampus { path: PathBuf, reason: String },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl CampathError {
    /// Create an error for a location missing from the location table
    pub fn location_not_found(name: impl Into<String>) -> Self {
        CampathError::LocationNotFound { name: name.into() }
    }

    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        CampathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CampathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CampathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// True when the error names a location absent from the location table.
    /// Callers use this to prompt the user instead of failing hard.
    pub fn is_location_not_found(&self) -> bool {
        matches!(self, CampathError::LocationNotFound { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CampathError::UnknownFormat(_)
            | CampathError::UnknownAlgorithm(_)
            | CampathError::UsageError(_)
            | CampathError::InvalidValue { .. } => ExitCode::Usage,

            CampathError::LocationNotFound { .. }
            | CampathError::InvalidCampus { .. }
            | CampathError::NotFound { .. } => ExitCode::Data,

            CampathError::Io(_)
            | CampathError::Json(_)
            | CampathError::Toml(_)
            | CampathError::FailedOperationWithTarget { .. }
            | CampathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CampathError::UnknownFormat(_) => "unknown_format",
            CampathError::UnknownAlgorithm(_) => "unknown_algorithm",
            CampathError::UsageError(_) => "usage_error",
            CampathError::LocationNotFound { .. } => "location_not_found",
            CampathError::InvalidCampus { .. } => "invalid_campus",
            CampathError::InvalidValue { .. } => "invalid_value",
            CampathError::NotFound { .. } => "not_found",
            CampathError::Io(_) => "io_error",
            CampathError::Json(_) => "json_error",
            CampathError::Toml(_) => "toml_error",
            CampathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            CampathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for campath operations
pub type Result<T> = std::result::Result<T, CampathError>;

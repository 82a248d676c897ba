//! # Error Types
//!
//! Structured error types for roster_core. Each variant carries enough
//! context to understand and fix the problem programmatically, and every
//! error serializes to JSON for tooling that consumes the core as an API.
//!
//! Lookup misses are deliberately NOT errors: searches that legitimately
//! find nothing return `Option` or an empty `Vec`.
//!
//! ## Example
//!
//! ```rust
//! use roster_core::errors::{RosterError, RosterResult};
//!
//! fn validate_gpa(gpa: f64) -> RosterResult<()> {
//!     if !(0.0..=4.0).contains(&gpa) {
//!         return Err(RosterError::invalid_input(
//!             "gpa",
//!             gpa.to_string(),
//!             "GPA must be between 0.0 and 4.0",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roster_core operations
pub type RosterResult<T> = Result<T, RosterError>;

/// Structured error type for roster operations.
///
/// Validation failures (`InvalidInput`, `UnknownLetterGrade`) are raised at
/// the point of construction or mutation and are never partially applied.
/// Persistence failures (`FileNotFound`, `FileError`, `SerializationError`,
/// `VersionMismatch`) propagate to the caller unmodified.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RosterError {
    /// An input value is out of its contract range or format
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Letter grade not in the recognized A..F scale
    #[error("Unrecognized letter grade: {letter}")]
    UnknownLetterGrade { letter: String },

    /// Roster file does not exist
    #[error("File not found: '{path}'")]
    FileNotFound { path: String },

    /// File I/O error during save or load
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error, including on-disk content
    /// that parses but violates the record field contracts
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Roster file schema version is incompatible
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl RosterError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RosterError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownLetterGrade error
    pub fn unknown_letter_grade(letter: impl Into<String>) -> Self {
        RosterError::UnknownLetterGrade {
            letter: letter.into(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        RosterError::FileNotFound { path: path.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RosterError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error came from the persistence layer
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            RosterError::FileNotFound { .. }
                | RosterError::FileError { .. }
                | RosterError::SerializationError { .. }
                | RosterError::VersionMismatch { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RosterError::InvalidInput { .. } => "INVALID_INPUT",
            RosterError::UnknownLetterGrade { .. } => "UNKNOWN_LETTER_GRADE",
            RosterError::FileNotFound { .. } => "FILE_NOT_FOUND",
            RosterError::FileError { .. } => "FILE_ERROR",
            RosterError::SerializationError { .. } => "SERIALIZATION_ERROR",
            RosterError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

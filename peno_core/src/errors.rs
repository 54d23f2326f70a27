//! # Error Types
//!
//! Structured error types for peno_core. Every failure is distinguishable by
//! kind so that a report layer can translate it without parsing strings.
//!
//! ## Example
//!
//! ```rust
//! use peno_core::errors::{CalcError, CalcResult};
//!
//! fn validate_slab_depth(d_c: f64) -> CalcResult<()> {
//!     if d_c <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "slab_depth",
//!             d_c.to_string(),
//!             "Slab depth must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_slab_depth(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for peno_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and file operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is out of range or would make a formula divide by zero
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The governing compressive force lies outside every neutral-axis band
    #[error("F_cH = {f_ch} does not fall in any composite case band ({lower}, {upper}]")]
    UnclassifiableCase { f_ch: f64, lower: f64, upper: f64 },

    /// A depth formula was requested for a case outside 1..=6
    #[error("Unknown composite case index {index}: expected 1 to 6")]
    UnknownCaseIndex { index: i64 },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnclassifiableCase error
    pub fn unclassifiable_case(f_ch: f64, lower: f64, upper: f64) -> Self {
        CalcError::UnclassifiableCase { f_ch, lower, upper }
    }

    /// Create an UnknownCaseIndex error
    pub fn unknown_case_index(index: impl Into<i64>) -> Self {
        CalcError::UnknownCaseIndex { index: index.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError from any displayable cause
    pub fn serialization(reason: impl std::fmt::Display) -> Self {
        CalcError::SerializationError {
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by the caller's numbers rather than by the
    /// environment (files, serialization).
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::UnclassifiableCase { .. }
                | CalcError::UnknownCaseIndex { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnclassifiableCase { .. } => "UNCLASSIFIABLE_CASE",
            CalcError::UnknownCaseIndex { .. } => "UNKNOWN_CASE_INDEX",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("lambda", "1.4", "Rib fill factor must be within [0, 1]");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_case_index(7).error_code(), "UNKNOWN_CASE_INDEX");
        assert_eq!(
            CalcError::unclassifiable_case(10.0, 0.0, 5.0).error_code(),
            "UNCLASSIFIABLE_CASE"
        );
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
        assert_eq!(CalcError::invalid_input("h_r", "-1", "negative").error_code(), "INVALID_INPUT");
        assert_eq!(CalcError::file_error("open", "a.wpn", "missing").error_code(), "FILE_ERROR");
        let mismatch = CalcError::VersionMismatch {
            file_version: "9.0.0".to_string(),
            expected_version: "0.1.0".to_string(),
        };
        assert_eq!(mismatch.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_input_errors_are_distinguished() {
        assert!(CalcError::unknown_case_index(0).is_input_error());
        assert!(!CalcError::file_error("open", "a.wpn", "missing").is_input_error());
    }

    #[test]
    fn test_display_messages() {
        let err = CalcError::unknown_case_index(9);
        assert_eq!(err.to_string(), "Unknown composite case index 9: expected 1 to 6");
    }
}

//! # Error Types
//!
//! Structured error types for scant_core. Validation problems surface as
//! values the caller can inspect and fix; the engine never blocks waiting for
//! corrected input.
//!
//! Non-fatal conditions (plate fallback, proportion violations, speed
//! anomalies) are not errors. They are collected as
//! [`Advisory`](crate::advisories::Advisory) records instead.
//!
//! ## Example
//!
//! ```rust
//! use scant_core::errors::{ScantError, ScantResult};
//!
//! fn validate_spacing(spacing_mm: f64) -> ScantResult<()> {
//!     if spacing_mm <= 0.0 {
//!         return Err(ScantError::invalid_input(
//!             "girder_spacing_mm",
//!             spacing_mm.to_string(),
//!             "Spacing must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_spacing(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for scant_core operations
pub type ScantResult<T> = Result<T, ScantError>;

/// Structured error type for scantling operations.
///
/// Each variant carries enough context for a caller to report the problem or
/// correct the offending input programmatically.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ScantError {
    /// An input value is invalid (zero/negative dimension, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Design category outside A-D
    #[error("Invalid design category '{value}' - expected one of A, B, C, D")]
    InvalidDesignCategory { value: String },

    /// Craft mode code other than 1 (planing) or 2 (displacement)
    #[error("Invalid craft mode '{value}' - expected 1 (planing) or 2 (displacement)")]
    InvalidCraftMode { value: String },

    /// A label was not found in a reference catalog
    #[error("{catalog} catalog has no entry '{label}'")]
    CatalogEntryNotFound { catalog: String, label: String },

    /// A reference catalog has no entries at all
    #[error("{catalog} catalog is empty")]
    EmptyCatalog { catalog: String },

    /// A pipeline stage ran before the stage it depends on
    #[error("Member '{member}' is not ready for {stage} - {missing} has not been computed")]
    PipelineOrder {
        member: String,
        stage: String,
        missing: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
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

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ScantError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ScantError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        ScantError::MissingField {
            field: field.into(),
        }
    }

    /// Create a CatalogEntryNotFound error
    pub fn not_in_catalog(catalog: impl Into<String>, label: impl Into<String>) -> Self {
        ScantError::CatalogEntryNotFound {
            catalog: catalog.into(),
            label: label.into(),
        }
    }

    /// Create a PipelineOrder error
    pub fn pipeline_order(member: impl Into<String>, stage: impl Into<String>, missing: impl Into<String>) -> Self {
        ScantError::PipelineOrder {
            member: member.into(),
            stage: stage.into(),
            missing: missing.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        ScantError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>, locked_at: impl Into<String>) -> Self {
        ScantError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a validation error the caller can fix by changing input
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScantError::InvalidInput { .. }
                | ScantError::MissingField { .. }
                | ScantError::InvalidDesignCategory { .. }
                | ScantError::InvalidCraftMode { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ScantError::InvalidInput { .. } => "INVALID_INPUT",
            ScantError::MissingField { .. } => "MISSING_FIELD",
            ScantError::InvalidDesignCategory { .. } => "INVALID_DESIGN_CATEGORY",
            ScantError::InvalidCraftMode { .. } => "INVALID_CRAFT_MODE",
            ScantError::CatalogEntryNotFound { .. } => "CATALOG_ENTRY_NOT_FOUND",
            ScantError::EmptyCatalog { .. } => "EMPTY_CATALOG",
            ScantError::PipelineOrder { .. } => "PIPELINE_ORDER",
            ScantError::FileError { .. } => "FILE_ERROR",
            ScantError::FileLocked { .. } => "FILE_LOCKED",
            ScantError::SerializationError { .. } => "SERIALIZATION_ERROR",
            ScantError::VersionMismatch { .. } => "VERSION_MISMATCH",
            ScantError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

/// Require a strictly positive, finite value for a named input.
pub(crate) fn require_positive(field: &str, value: f64) -> ScantResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ScantError::invalid_input(
            field,
            value.to_string(),
            "Value must be positive",
        ));
    }
    Ok(())
}

/// Require a finite value that is zero or greater.
pub(crate) fn require_non_negative(field: &str, value: f64) -> ScantResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ScantError::invalid_input(
            field,
            value.to_string(),
            "Value must not be negative",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ScantError::invalid_input("lwl_m", "-5.0", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: ScantError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ScantError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            ScantError::not_in_catalog("Material", "AL_7075").error_code(),
            "CATALOG_ENTRY_NOT_FOUND"
        );
        assert_eq!(
            ScantError::InvalidDesignCategory { value: "E".into() }.error_code(),
            "INVALID_DESIGN_CATEGORY"
        );
    }

    #[test]
    fn test_validation_classification() {
        assert!(ScantError::InvalidCraftMode { value: "3".into() }.is_validation());
        assert!(!ScantError::Internal { message: "x".into() }.is_validation());
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("x", 1.0).is_ok());
        assert!(require_positive("x", 0.0).is_err());
        assert!(require_positive("x", f64::NAN).is_err());
        assert!(require_non_negative("x", 0.0).is_ok());
        assert!(require_non_negative("x", -0.1).is_err());
    }
}

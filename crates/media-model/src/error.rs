//! Error types for the media-model crate.
//!
//! Record construction itself never fails; these errors come out of
//! [`Record::validate`](crate::Record::validate) when a caller wants to check
//! user-entered values before handing a record to the catalog.

use thiserror::Error;

/// Errors that can occur while validating a media record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A data field had a value outside its allowed range
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Record-level validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ModelError>;

//! Error types for the similarity crate.

use media_model::MediaKind;
use thiserror::Error;

/// Errors raised when scoring two records
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityError {
    /// Records of different kinds cannot be compared; callers filter by kind first
    #[error("Cannot compare a {left} with a {right}")]
    KindMismatch { left: MediaKind, right: MediaKind },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SimilarityError>;

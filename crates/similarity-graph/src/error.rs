//! Error types for the similarity-graph crate.

use thiserror::Error;

/// Errors raised by graph construction and traversal
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A vertex index outside `0..size`. Indicates broken index bookkeeping
    /// in the caller rather than bad data.
    #[error("Vertex index {index} out of range for graph of {size} vertices")]
    InvalidIndex { index: usize, size: usize },

    /// No edge from `u` to `v`. Expected in sparse graphs; callers recover.
    #[error("No edge from {u} to {v}")]
    EdgeNotFound { u: usize, v: usize },

    /// Negative or NaN edge weight
    #[error("Invalid weight {weight} for edge {u} -> {v}")]
    InvalidWeight { u: usize, v: usize, weight: f64 },
}

pub type Result<T> = std::result::Result<T, GraphError>;

//! Error types for the catalog crate.

use media_model::ModelError;
use similarity::SimilarityError;
use similarity_graph::GraphError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// The record is not part of the catalog
    #[error("Record not found in catalog: {name}")]
    RecordNotFound { name: String },

    /// The record failed validation on the way in
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] ModelError),

    #[error("Similarity error: {0}")]
    Similarity(#[from] SimilarityError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

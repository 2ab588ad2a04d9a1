//! # Similarity Crate
//!
//! Reduces two records of the same kind to a single score in `[0, 1]`.
//!
//! ## Components
//!
//! - **bigram**: Jaccard index over character bigrams, used for every text field
//! - **weights**: The weight table, with defaults and serde support
//! - **model**: `SimilarityModel`, which combines a shared base score with
//!   kind-specific fields
//!
//! ## Example Usage
//!
//! ```ignore
//! use media_model::Record;
//! use similarity::similarity;
//!
//! let dune = Record::book("Dune", "Sci-Fi", "Herbert");
//! let messiah = Record::book("Dune Messiah", "Sci-Fi", "Herbert");
//!
//! let score = similarity(&dune, &messiah)?;
//! assert!(score > 0.8);
//! ```

pub mod bigram;
pub mod error;
pub mod model;
pub mod weights;

pub use bigram::bigram_jaccard;
pub use error::{Result, SimilarityError};
pub use model::{SimilarityModel, similarity};
pub use weights::{
    BaseWeights, BookWeights, Falloff, GameWeights, MovieWeights, MusicWeights, ShowWeights,
    SimilarityWeights,
};

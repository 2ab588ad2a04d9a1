//! # Catalog Crate
//!
//! Personal media catalog with case-insensitive name lookup, groups, sorting
//! and "find similar" queries.
//!
//! ## Main Components
//!
//! - **catalog**: `MediaCatalog`, the record collection and its name index
//! - **neighbors**: `SimilarityIndexBuilder` (per-query similarity graph and
//!   top-K ranking)
//! - **traits** / **filters**: `RecordFilter` and the stock filters
//! - **sort**: `SortKey`
//!
//! ## Example Usage
//! ```ignore
//! use catalog::MediaCatalog;
//! use media_model::Record;
//!
//! let mut catalog = MediaCatalog::new();
//! catalog.add(Record::book("Dune", "Sci-Fi", "Frank Herbert"))?;
//! catalog.add(Record::book("Dune Messiah", "Sci-Fi", "Frank Herbert"))?;
//!
//! let dune = Record::book("Dune", "Sci-Fi", "Frank Herbert");
//! for neighbor in catalog.find_similar(&dune, 5)? {
//!     println!("{} ({:.2})", neighbor.record, neighbor.similarity);
//! }
//! ```

pub mod catalog;
pub mod error;
pub mod filters;
pub mod neighbors;
pub mod sort;
pub mod traits;

// Re-export main types
pub use catalog::MediaCatalog;
pub use error::{CatalogError, CatalogResult};
pub use neighbors::{DEFAULT_TOP_K, Neighbor, SimilarityIndexBuilder, TopK, rank_neighbors};
pub use sort::SortKey;
pub use traits::RecordFilter;

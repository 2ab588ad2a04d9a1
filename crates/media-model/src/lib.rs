//! # Media Model Crate
//!
//! Core record types for a personal media catalog (books, movies, shows,
//! games and music).
//!
//! ## Main Components
//!
//! - **types**: `Record`, its shared `MediaBase` attributes and the
//!   kind-specific `MediaDetails`
//! - **error**: Validation errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use media_model::{MediaKind, Record};
//!
//! let dune = Record::book("Dune", "Sci-Fi", "Frank Herbert")
//!     .with_year(1965)
//!     .with_rating(9.5);
//!
//! dune.validate()?;
//! assert_eq!(dune.kind(), MediaKind::Book);
//! ```

pub mod error;
pub mod types;

pub use error::{ModelError, Result};
pub use types::{MAX_RATING, MediaBase, MediaDetails, MediaKind, Record, Rgba};

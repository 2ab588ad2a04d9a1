//! Filter implementations for similarity queries.

pub mod format;
pub mod kind;
pub mod minimum_rating;

pub use format::FormatFilter;
pub use kind::KindFilter;
pub use minimum_rating::MinimumRatingFilter;

//! # Bucket Tree Crate
//!
//! A self-balancing (AVL) ordered multi-map. Each distinct key owns a
//! *bucket*: the values added under that key, in insertion order.
//!
//! ## Main Components
//!
//! - **tree**: `BucketTree` with add / get / remove / remove_value and
//!   diagnostics (`height`, `path`, `is_balanced`)
//! - **iter**: in-order and lower-bound iteration
//!
//! Keys are ordered by `Ord` or by a comparator supplied at construction,
//! which is how the catalog gets case-insensitive name lookup.

pub mod iter;
pub mod tree;

pub use iter::Iter;
pub use tree::{BucketTree, Comparator};

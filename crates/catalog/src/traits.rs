//! Core traits for narrowing the records a similarity query considers.

use media_model::Record;

/// Predicate over catalog records.
///
/// Filters are applied before the similarity graph is built, so a record
/// that fails any filter never becomes a vertex.
///
/// `Send + Sync` lets a filter be shared with the rayon workers that score
/// record pairs.
pub trait RecordFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// `true` if `record` should be kept
    fn matches(&self, record: &Record) -> bool;
}

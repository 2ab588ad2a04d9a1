//! Filter restricting records to a set of media kinds.

use media_model::{MediaKind, Record};

use crate::traits::RecordFilter;

/// Keeps records whose kind is in the allowed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindFilter {
    kinds: Vec<MediaKind>,
}

impl KindFilter {
    pub fn new(kinds: impl IntoIterator<Item = MediaKind>) -> Self {
        let mut kinds: Vec<MediaKind> = kinds.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        Self { kinds }
    }

    /// Only records of exactly `kind`
    pub fn single(kind: MediaKind) -> Self {
        Self { kinds: vec![kind] }
    }

    pub fn kinds(&self) -> &[MediaKind] {
        &self.kinds
    }
}

impl RecordFilter for KindFilter {
    fn name(&self) -> &str {
        "KindFilter"
    }

    fn matches(&self, record: &Record) -> bool {
        self.kinds.contains(&record.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_filter() {
        let filter = KindFilter::new([MediaKind::Movie, MediaKind::Show, MediaKind::Movie]);
        assert_eq!(filter.kinds(), &[MediaKind::Movie, MediaKind::Show]);

        assert!(filter.matches(&Record::movie("Alien", "Horror", "Ridley Scott", 117)));
        assert!(filter.matches(&Record::show("Lost", "Drama", "Abrams", 6, 121)));
        assert!(!filter.matches(&Record::book("Dune", "Sci-Fi", "Herbert")));
    }

    #[test]
    fn test_empty_kind_filter_rejects_everything() {
        let filter = KindFilter::new(Vec::new());
        assert!(!filter.matches(&Record::music("Blue", "Folk", "Joni Mitchell")));
    }
}

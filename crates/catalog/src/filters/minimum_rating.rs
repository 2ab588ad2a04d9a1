//! Filter enforcing a minimum personal rating.

use media_model::Record;

use crate::traits::RecordFilter;

/// Removes records rated below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// # Arguments
    /// * `min_rating` - Lowest rating kept, on the catalog's 0-10 scale
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl RecordFilter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, record: &Record) -> bool {
        record.base.rating >= self.min_rating
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_rating_filter() {
        let filter = MinimumRatingFilter::new(7.5);

        let great = Record::book("Dune", "Sci-Fi", "Herbert").with_rating(9.0);
        let edge = Record::book("Emma", "Romance", "Austen").with_rating(7.5);
        let poor = Record::book("Twilight", "Romance", "Meyer").with_rating(3.0);

        assert!(filter.matches(&great));
        assert!(filter.matches(&edge));
        assert!(!filter.matches(&poor));
    }
}

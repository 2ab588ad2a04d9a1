//! Sort orders for the catalog listing.

use std::cmp::Ordering;

use media_model::Record;
use serde::{Deserialize, Serialize};

/// How the catalog orders its records.
///
/// Text keys compare case-insensitively. Rating and date added put the
/// largest value first; everything else is ascending. Sorting is stable, so
/// records with equal keys keep their relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Genre,
    Format,
    /// Highest rated first
    Rating,
    /// By hue, then saturation, then brightness
    Colour,
    Year,
    YearConsumed,
    /// Most recently added first
    #[default]
    DateAdded,
}

impl SortKey {
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let (a, b) = (&a.base, &b.base);
        match self {
            SortKey::Name => compare_text(&a.name, &b.name),
            SortKey::Genre => compare_text(&a.genre, &b.genre),
            SortKey::Format => compare_text(&a.format, &b.format),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Colour => {
                let (h1, s1, v1) = a.color.to_hsb();
                let (h2, s2, v2) = b.color.to_hsb();
                h1.total_cmp(&h2)
                    .then(s1.total_cmp(&s2))
                    .then(v1.total_cmp(&v2))
            }
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::YearConsumed => a.year_consumed.cmp(&b.year_consumed),
            SortKey::DateAdded => b.date_added.cmp(&a.date_added),
        }
    }
}

/// Case-insensitive ordering without allocating
pub(crate) fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_model::Rgba;

    fn sorted(mut records: Vec<Record>, key: SortKey) -> Vec<String> {
        records.sort_by(|a, b| key.compare(a, b));
        records.into_iter().map(|r| r.base.name).collect()
    }

    #[test]
    fn test_name_is_case_insensitive() {
        let records = vec![
            Record::book("emma", "Romance", "Austen"),
            Record::book("Dune", "Sci-Fi", "Herbert"),
            Record::book("brave new world", "Sci-Fi", "Huxley"),
        ];
        assert_eq!(sorted(records, SortKey::Name), vec!["brave new world", "Dune", "emma"]);
    }

    #[test]
    fn test_rating_descending() {
        let records = vec![
            Record::book("A", "x", "x").with_rating(3.0),
            Record::book("B", "x", "x").with_rating(9.5),
            Record::book("C", "x", "x").with_rating(7.0),
        ];
        assert_eq!(sorted(records, SortKey::Rating), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_date_added_newest_first_by_default() {
        let records = vec![
            Record::book("old", "x", "x").with_date_added(100),
            Record::book("new", "x", "x").with_date_added(300),
            Record::book("mid", "x", "x").with_date_added(200),
        ];
        assert_eq!(sorted(records, SortKey::default()), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_colour_by_hue_then_saturation() {
        let records = vec![
            Record::book("blue", "x", "x").with_color(Rgba::new(0.0, 0.0, 1.0, 1.0)),
            Record::book("red", "x", "x").with_color(Rgba::new(1.0, 0.0, 0.0, 1.0)),
            Record::book("pink", "x", "x").with_color(Rgba::new(1.0, 0.5, 0.5, 1.0)),
            Record::book("green", "x", "x").with_color(Rgba::new(0.0, 1.0, 0.0, 1.0)),
        ];
        // pink and red share hue 0; pink is less saturated
        assert_eq!(sorted(records, SortKey::Colour), vec!["pink", "red", "green", "blue"]);
    }

    #[test]
    fn test_years_ascending_and_stable() {
        let records = vec![
            Record::book("b", "x", "x").with_year(1990),
            Record::book("a", "x", "x").with_year(1965),
            Record::book("c", "x", "x").with_year(1990),
        ];
        assert_eq!(sorted(records, SortKey::Year), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sort_key_from_json() {
        let key: SortKey = serde_json::from_str(r#""YearConsumed""#).unwrap();
        assert_eq!(key, SortKey::YearConsumed);
    }
}

//! Filter on the physical or digital format of a record.

use media_model::Record;

use crate::traits::RecordFilter;

/// Keeps records whose format matches, ignoring case and surrounding
/// whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFilter {
    format: String,
}

impl FormatFilter {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into().trim().to_lowercase(),
        }
    }
}

impl RecordFilter for FormatFilter {
    fn name(&self) -> &str {
        "FormatFilter"
    }

    fn matches(&self, record: &Record) -> bool {
        record.base.format.trim().to_lowercase() == self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_filter_ignores_case() {
        let filter = FormatFilter::new("Blu-ray ");

        let bluray = Record::movie("Alien", "Horror", "Ridley Scott", 117).with_format("BLU-RAY");
        let dvd = Record::movie("Heat", "Crime", "Michael Mann", 170).with_format("DVD");
        let none = Record::movie("Rope", "Thriller", "Hitchcock", 80);

        assert!(filter.matches(&bluray));
        assert!(!filter.matches(&dvd));
        assert!(!filter.matches(&none));
    }
}

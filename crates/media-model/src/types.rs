//! Core domain types for the media catalog.
//!
//! A [`Record`] is one catalog entry: a shared [`MediaBase`] attribute set plus
//! a closed [`MediaDetails`] sum type carrying the kind-specific fields. Code
//! that needs per-kind behaviour matches on `MediaDetails`, so adding a kind
//! is a compile error everywhere it has not been handled yet.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::{ModelError, Result};

/// Highest rating a record can carry
pub const MAX_RATING: f64 = 10.0;

// =============================================================================
// Media kinds
// =============================================================================

/// The five kinds of media the catalog knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MediaKind {
    Book,
    Movie,
    Show,
    Game,
    Music,
}

impl MediaKind {
    /// All kinds, in declaration order
    pub const ALL: [MediaKind; 5] = [
        MediaKind::Book,
        MediaKind::Movie,
        MediaKind::Show,
        MediaKind::Game,
        MediaKind::Music,
    ];
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MediaKind::Book => "Book",
            MediaKind::Movie => "Movie",
            MediaKind::Show => "Show",
            MediaKind::Game => "Game",
            MediaKind::Music => "Music",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Colour
// =============================================================================

/// RGBA colour with every component in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns `(hue in degrees, saturation, brightness)`.
    pub fn to_hsb(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let brightness = max;
        let saturation = if max > 0.0 { delta / max } else { 0.0 };

        let hue = if delta == 0.0 {
            0.0
        } else if max == self.r {
            60.0 * ((self.g - self.b) / delta).rem_euclid(6.0)
        } else if max == self.g {
            60.0 * ((self.b - self.r) / delta + 2.0)
        } else {
            60.0 * ((self.r - self.g) / delta + 4.0)
        };

        (hue, saturation, brightness)
    }

    fn components(&self) -> [(&'static str, f64); 4] {
        [("color.r", self.r), ("color.g", self.g), ("color.b", self.b), ("color.a", self.a)]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

// =============================================================================
// Shared attributes
// =============================================================================

/// Attributes every kind of media carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaBase {
    pub name: String,
    pub genre: String,
    pub description: String,
    pub format: String,
    /// Release year; negative values are BCE
    pub year: i32,
    pub year_consumed: i32,
    /// Rating from 0.0 to 10.0
    pub rating: f64,
    pub color: Rgba,
    /// Unix timestamp (seconds) when the record was created
    pub date_added: i64,
}

impl MediaBase {
    /// Creates base attributes with only a name and genre set.
    ///
    /// Everything else starts empty or zero, and `date_added` is now.
    pub fn new(name: impl Into<String>, genre: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            genre: genre.into(),
            description: String::new(),
            format: String::new(),
            year: 0,
            year_consumed: 0,
            rating: 0.0,
            color: Rgba::default(),
            date_added: unix_now(),
        }
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

// =============================================================================
// Kind-specific fields
// =============================================================================

/// Fields that only exist for one kind of media
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MediaDetails {
    Book {
        author: String,
    },
    Movie {
        director: String,
        duration_minutes: u32,
    },
    Show {
        creator: String,
        num_seasons: u32,
        num_episodes: u32,
    },
    Game {
        developer: String,
        console: String,
        num_players: u32,
    },
    Music {
        artist: String,
    },
}

impl MediaDetails {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaDetails::Book { .. } => MediaKind::Book,
            MediaDetails::Movie { .. } => MediaKind::Movie,
            MediaDetails::Show { .. } => MediaKind::Show,
            MediaDetails::Game { .. } => MediaKind::Game,
            MediaDetails::Music { .. } => MediaKind::Music,
        }
    }
}

// =============================================================================
// Record
// =============================================================================

/// One entry in the catalog.
///
/// Equality (and hashing) only looks at name, genre, description, format,
/// year and year consumed. Rating, colour, date added and the kind-specific
/// fields are ignored, so two entries that differ only in rating are the
/// same record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    pub base: MediaBase,
    pub details: MediaDetails,
}

impl Record {
    pub fn new(base: MediaBase, details: MediaDetails) -> Self {
        Self { base, details }
    }

    pub fn book(
        name: impl Into<String>,
        genre: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self::new(
            MediaBase::new(name, genre),
            MediaDetails::Book { author: author.into() },
        )
    }

    pub fn movie(
        name: impl Into<String>,
        genre: impl Into<String>,
        director: impl Into<String>,
        duration_minutes: u32,
    ) -> Self {
        Self::new(
            MediaBase::new(name, genre),
            MediaDetails::Movie {
                director: director.into(),
                duration_minutes,
            },
        )
    }

    pub fn show(
        name: impl Into<String>,
        genre: impl Into<String>,
        creator: impl Into<String>,
        num_seasons: u32,
        num_episodes: u32,
    ) -> Self {
        Self::new(
            MediaBase::new(name, genre),
            MediaDetails::Show {
                creator: creator.into(),
                num_seasons,
                num_episodes,
            },
        )
    }

    pub fn game(
        name: impl Into<String>,
        genre: impl Into<String>,
        developer: impl Into<String>,
        console: impl Into<String>,
        num_players: u32,
    ) -> Self {
        Self::new(
            MediaBase::new(name, genre),
            MediaDetails::Game {
                developer: developer.into(),
                console: console.into(),
                num_players,
            },
        )
    }

    pub fn music(
        name: impl Into<String>,
        genre: impl Into<String>,
        artist: impl Into<String>,
    ) -> Self {
        Self::new(
            MediaBase::new(name, genre),
            MediaDetails::Music { artist: artist.into() },
        )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base.description = description.into();
        self
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.base.format = format.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.base.year = year;
        self
    }

    pub fn with_year_consumed(mut self, year_consumed: i32) -> Self {
        self.base.year_consumed = year_consumed;
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.base.rating = rating;
        self
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.base.color = color;
        self
    }

    pub fn with_date_added(mut self, date_added: i64) -> Self {
        self.base.date_added = date_added;
        self
    }

    pub fn kind(&self) -> MediaKind {
        self.details.kind()
    }

    pub fn name(&self) -> &str {
        &self.base.name
    }

    /// Key used by the name index: the lowercased name
    pub fn index_key(&self) -> String {
        self.base.name.to_lowercase()
    }

    /// Check that user-entered values are in range
    ///
    /// Checks that:
    /// - The name is not blank
    /// - The rating is within 0.0 - 10.0
    /// - Every colour component is within 0.0 - 1.0
    pub fn validate(&self) -> Result<()> {
        if self.base.name.trim().is_empty() {
            return Err(ModelError::ValidationError("name must not be blank".to_string()));
        }
        if !(0.0..=MAX_RATING).contains(&self.base.rating) {
            return Err(ModelError::InvalidValue {
                field: "rating".to_string(),
                value: self.base.rating.to_string(),
            });
        }
        for (field, value) in self.base.color.components() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ModelError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    fn identity(&self) -> (&str, &str, &str, &str, i32, i32) {
        let b = &self.base;
        (&b.name, &b.genre, &b.description, &b.format, b.year, b.year_consumed)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Record {}

impl Hash for Record {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.base.name, self.kind(), self.base.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_follows_details() {
        assert_eq!(Record::book("Dune", "Sci-Fi", "Herbert").kind(), MediaKind::Book);
        assert_eq!(Record::movie("Alien", "Horror", "Scott", 117).kind(), MediaKind::Movie);
        assert_eq!(Record::show("Lost", "Drama", "Abrams", 6, 121).kind(), MediaKind::Show);
        assert_eq!(
            Record::game("Halo", "Shooter", "Bungie", "Xbox", 4).kind(),
            MediaKind::Game
        );
        assert_eq!(Record::music("Blue", "Folk", "Joni Mitchell").kind(), MediaKind::Music);
    }

    #[test]
    fn test_equality_ignores_rating_color_and_date() {
        let a = Record::book("Dune", "Sci-Fi", "Herbert")
            .with_year(1965)
            .with_rating(9.0)
            .with_date_added(1);
        let b = Record::book("Dune", "Sci-Fi", "Herbert")
            .with_year(1965)
            .with_rating(2.5)
            .with_color(Rgba::new(1.0, 0.0, 0.0, 1.0))
            .with_date_added(99);
        assert_eq!(a, b);

        let c = a.clone().with_year_consumed(2020);
        assert_ne!(a, c);
    }

    #[test]
    fn test_validate_rejects_out_of_range_values() {
        let ok = Record::music("Blue", "Folk", "Joni Mitchell").with_rating(10.0);
        assert!(ok.validate().is_ok());

        let rating = ok.clone().with_rating(10.5);
        assert!(matches!(
            rating.validate(),
            Err(ModelError::InvalidValue { ref field, .. }) if field == "rating"
        ));

        let color = ok.clone().with_color(Rgba::new(0.0, 1.2, 0.0, 1.0));
        assert!(matches!(
            color.validate(),
            Err(ModelError::InvalidValue { ref field, .. }) if field == "color.g"
        ));

        let blank = Record::music("  ", "Folk", "Joni Mitchell");
        assert!(matches!(blank.validate(), Err(ModelError::ValidationError(_))));
    }

    #[test]
    fn test_hsb_conversion() {
        let (h, s, v) = Rgba::new(1.0, 0.0, 0.0, 1.0).to_hsb();
        assert_eq!((h, s, v), (0.0, 1.0, 1.0));

        let (h, _, _) = Rgba::new(0.0, 0.0, 1.0, 1.0).to_hsb();
        assert!((h - 240.0).abs() < 1e-9);

        let (h, s, v) = Rgba::new(0.5, 0.5, 0.5, 1.0).to_hsb();
        assert_eq!((h, s, v), (0.0, 0.0, 0.5));
    }

    #[test]
    fn test_negative_year_is_bce() {
        let record = Record::book("The Odyssey", "Epic", "Homer").with_year(-700);
        assert_eq!(record.base.year, -700);
        assert_eq!(record.to_string(), "The Odyssey (Book, -700)");
    }
}

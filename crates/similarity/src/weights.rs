//! Tunable weights for the similarity model.
//!
//! The defaults are the calibration the catalog ships with. Every struct is
//! `serde`-enabled with `#[serde(default)]`, so a caller can load a partial
//! override (say, only `movie.director`) and keep the rest.

use serde::{Deserialize, Serialize};

/// Weights applied to the attributes every record shares.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseWeights {
    pub name: f64,
    pub genre: f64,
    pub year: f64,
    pub rating: f64,
}

impl Default for BaseWeights {
    fn default() -> Self {
        Self {
            name: 0.15,
            genre: 0.55,
            year: 0.20,
            rating: 0.10,
        }
    }
}

/// A numeric field that scores `1 - |Δ| / limit`, dropping to zero past `limit`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Falloff {
    pub weight: f64,
    pub limit: f64,
}

impl Falloff {
    pub const fn new(weight: f64, limit: f64) -> Self {
        Self { weight, limit }
    }

    /// Weighted score for an absolute difference.
    pub fn score(&self, diff: f64) -> f64 {
        if self.limit <= 0.0 {
            return if diff == 0.0 { self.weight } else { 0.0 };
        }
        if diff > self.limit {
            0.0
        } else {
            (1.0 - diff / self.limit) * self.weight
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookWeights {
    pub base: f64,
    pub author: f64,
}

impl Default for BookWeights {
    fn default() -> Self {
        Self { base: 0.85, author: 0.15 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicWeights {
    pub base: f64,
    pub artist: f64,
}

impl Default for MusicWeights {
    fn default() -> Self {
        Self { base: 0.85, artist: 0.15 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieWeights {
    pub base: f64,
    pub director: f64,
    /// Duration difference in minutes
    pub duration: Falloff,
}

impl Default for MovieWeights {
    fn default() -> Self {
        Self {
            base: 0.70,
            director: 0.25,
            duration: Falloff::new(0.05, 35.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowWeights {
    pub base: f64,
    pub creator: f64,
    pub seasons: Falloff,
    pub episodes: Falloff,
}

impl Default for ShowWeights {
    fn default() -> Self {
        Self {
            base: 0.70,
            creator: 0.20,
            seasons: Falloff::new(0.05, 3.0),
            episodes: Falloff::new(0.05, 20.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameWeights {
    pub base: f64,
    pub developer: f64,
    pub console: f64,
    pub players: Falloff,
}

impl Default for GameWeights {
    fn default() -> Self {
        Self {
            base: 0.70,
            developer: 0.15,
            console: 0.10,
            players: Falloff::new(0.05, 2.0),
        }
    }
}

/// Full weight table for [`SimilarityModel`](crate::SimilarityModel).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityWeights {
    pub base: BaseWeights,
    pub book: BookWeights,
    pub music: MusicWeights,
    pub movie: MovieWeights,
    pub show: ShowWeights,
    pub game: GameWeights,
}

//! Weighted similarity between two records of the same kind.
//!
//! ## Algorithm
//! 1. Score the shared attributes:
//!    `base = w.name·name + w.genre·genre + w.year·year + w.rating·rating`
//!    where name and genre are bigram Jaccard scores of the lowercased text
//! 2. Blend in the kind-specific fields:
//!    `score = base·kind.base + Σ field·kind.field`
//! 3. Clamp to `[0, 1]`
//!
//! The year term divides the gap by `i32::MAX`, so it sits at ~1.0 for any
//! realistic pair of years. The default weights were calibrated with that
//! term in place, so it is kept as is.

use media_model::{MAX_RATING, MediaBase, MediaDetails, Record};

use crate::bigram::bigram_jaccard;
use crate::error::{Result, SimilarityError};
use crate::weights::SimilarityWeights;

/// Scores pairs of records using a [`SimilarityWeights`] table
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimilarityModel {
    weights: SimilarityWeights,
}

impl SimilarityModel {
    pub fn new(weights: SimilarityWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &SimilarityWeights {
        &self.weights
    }

    /// Similarity in `[0, 1]` between two records of the same kind
    ///
    /// # Errors
    /// `KindMismatch` if `a` and `b` are different kinds of media.
    pub fn similarity(&self, a: &Record, b: &Record) -> Result<f64> {
        let base = self.base_score(&a.base, &b.base);
        let w = &self.weights;

        let score = match (&a.details, &b.details) {
            (MediaDetails::Book { author: x }, MediaDetails::Book { author: y }) => {
                base * w.book.base + text_score(x, y) * w.book.author
            }
            (MediaDetails::Music { artist: x }, MediaDetails::Music { artist: y }) => {
                base * w.music.base + text_score(x, y) * w.music.artist
            }
            (
                MediaDetails::Movie {
                    director: d1,
                    duration_minutes: m1,
                },
                MediaDetails::Movie {
                    director: d2,
                    duration_minutes: m2,
                },
            ) => {
                base * w.movie.base
                    + text_score(d1, d2) * w.movie.director
                    + w.movie.duration.score(abs_diff(*m1, *m2))
            }
            (
                MediaDetails::Show {
                    creator: c1,
                    num_seasons: s1,
                    num_episodes: e1,
                },
                MediaDetails::Show {
                    creator: c2,
                    num_seasons: s2,
                    num_episodes: e2,
                },
            ) => {
                base * w.show.base
                    + text_score(c1, c2) * w.show.creator
                    + w.show.seasons.score(abs_diff(*s1, *s2))
                    + w.show.episodes.score(abs_diff(*e1, *e2))
            }
            (
                MediaDetails::Game {
                    developer: d1,
                    console: c1,
                    num_players: p1,
                },
                MediaDetails::Game {
                    developer: d2,
                    console: c2,
                    num_players: p2,
                },
            ) => {
                base * w.game.base
                    + text_score(d1, d2) * w.game.developer
                    + text_score(c1, c2) * w.game.console
                    + w.game.players.score(abs_diff(*p1, *p2))
            }
            _ => {
                return Err(SimilarityError::KindMismatch {
                    left: a.kind(),
                    right: b.kind(),
                });
            }
        };

        Ok(score.clamp(0.0, 1.0))
    }

    /// Score over the attributes shared by every kind
    pub fn base_score(&self, a: &MediaBase, b: &MediaBase) -> f64 {
        let w = &self.weights.base;

        let name = text_score(&a.name, &b.name);
        let genre = text_score(&a.genre, &b.genre);
        let year_gap = (i64::from(a.year) - i64::from(b.year)).abs() as f64;
        let year = 1.0 - year_gap / f64::from(i32::MAX);
        let rating = 1.0 - (a.rating - b.rating).abs() / MAX_RATING;

        w.name * name + w.genre * genre + w.year * year + w.rating * rating
    }
}

/// Similarity under the default weights
pub fn similarity(a: &Record, b: &Record) -> Result<f64> {
    SimilarityModel::default().similarity(a, b)
}

fn text_score(a: &str, b: &str) -> f64 {
    bigram_jaccard(&a.to_lowercase(), &b.to_lowercase())
}

fn abs_diff(a: u32, b: u32) -> f64 {
    f64::from(a.abs_diff(b))
}

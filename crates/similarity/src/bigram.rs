//! Bigram Jaccard similarity between two strings.
//!
//! A bigram is a pair of adjacent characters. Each string is reduced to the
//! *set* of its bigrams, so repeated bigrams count once, and the score is
//! `|A ∩ B| / |A ∪ B|`.

use std::collections::HashSet;

/// Jaccard index over the bigram sets of `s1` and `s2`.
///
/// Case-sensitive; callers lowercase first when they want a
/// case-insensitive comparison.
///
/// Rules, in order:
/// 1. Either string blank (empty or whitespace only): `0.0`
/// 2. Both one character long: `1.0` if equal, else `0.0`
/// 3. Exactly one is one character long: `1.0` if the first characters
///    match, else `0.0`
/// 4. Otherwise the Jaccard index of the two bigram sets
pub fn bigram_jaccard(s1: &str, s2: &str) -> f64 {
    if s1.trim().is_empty() || s2.trim().is_empty() {
        return 0.0;
    }

    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 1 || len2 == 1 {
        // Both strings are non-blank, so a first character exists.
        let same_start = s1.chars().next() == s2.chars().next();
        return if len1 == 1 && len2 == 1 {
            if s1 == s2 { 1.0 } else { 0.0 }
        } else if same_start {
            1.0
        } else {
            0.0
        };
    }

    let a = bigrams(s1);
    let b = bigrams(s2);

    let intersection = a.intersection(&b).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

fn bigrams(s: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_strings_score_zero() {
        assert_eq!(bigram_jaccard("", "dune"), 0.0);
        assert_eq!(bigram_jaccard("dune", ""), 0.0);
        assert_eq!(bigram_jaccard("   ", "dune"), 0.0);
        assert_eq!(bigram_jaccard("", ""), 0.0);
    }

    #[test]
    fn test_identical_strings_score_one() {
        for s in ["dune", "sci-fi", "ab", "aaaa", "the lord of the rings"] {
            assert_eq!(bigram_jaccard(s, s), 1.0, "{s}");
        }
    }

    #[test]
    fn test_single_character_rules() {
        assert_eq!(bigram_jaccard("a", "a"), 1.0);
        assert_eq!(bigram_jaccard("a", "b"), 0.0);
        // exactly one single-character string: compare first characters
        assert_eq!(bigram_jaccard("a", "alien"), 1.0);
        assert_eq!(bigram_jaccard("alien", "a"), 1.0);
        assert_eq!(bigram_jaccard("b", "alien"), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // {du, un, ne} against 11 distinct bigrams of "dune messiah"
        let score = bigram_jaccard("dune", "dune messiah");
        assert!((score - 3.0 / 11.0).abs() < 1e-12);

        // {ni, ig, gh, ht} vs {na, ac, ch, ht}: only "ht" shared
        let score = bigram_jaccard("night", "nacht");
        assert!((score - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_bigrams_count_once() {
        // "aaaa" -> {aa}, "aa" -> {aa}
        assert_eq!(bigram_jaccard("aaaa", "aa"), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let words = ["dune", "dune messiah", "a", "alien", "aliens", "sci-fi", "fantasy", "x"];
        for a in words {
            for b in words {
                assert_eq!(bigram_jaccard(a, b), bigram_jaccard(b, a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(bigram_jaccard("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(bigram_jaccard("café", "café"), 1.0);
        assert_eq!(bigram_jaccard("é", "éclair"), 1.0);
    }
}

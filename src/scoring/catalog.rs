//! The base scoring shapes and their point values.
//!
//! Every score the engine awards is either one of these entries or a sum of
//! several of them (see `resolver`). Declaration order matters: it is the
//! tie-break order for equally scoring patterns of the same length.

use super::dice::Dice;
use super::pattern::ScoringPattern;

/// Highest score any single pattern can award (six 1s).
pub const MAX_PATTERN_SCORE: u32 = 8000;

/// Base scoring shapes as `(faces, score)`.
pub const BASE_PATTERNS: [(&[u8], u32); 29] = [
    // Six of a kind
    (&[1, 1, 1, 1, 1, 1], 8000),
    (&[2, 2, 2, 2, 2, 2], 1600),
    (&[3, 3, 3, 3, 3, 3], 2400),
    (&[4, 4, 4, 4, 4, 4], 3200),
    (&[5, 5, 5, 5, 5, 5], 4000),
    (&[6, 6, 6, 6, 6, 6], 4800),
    // Five of a kind
    (&[1, 1, 1, 1, 1], 4000),
    (&[2, 2, 2, 2, 2], 800),
    (&[3, 3, 3, 3, 3], 1200),
    (&[4, 4, 4, 4, 4], 1600),
    (&[5, 5, 5, 5, 5], 2000),
    (&[6, 6, 6, 6, 6], 2400),
    // Four of a kind
    (&[1, 1, 1, 1], 2000),
    (&[2, 2, 2, 2], 400),
    (&[3, 3, 3, 3], 600),
    (&[4, 4, 4, 4], 800),
    (&[5, 5, 5, 5], 1000),
    (&[6, 6, 6, 6], 1200),
    // Straights
    (&[1, 2, 3, 4, 5, 6], 1500),
    (&[1, 2, 3, 4, 5], 500),
    (&[2, 3, 4, 5, 6], 750),
    // Three of a kind
    (&[1, 1, 1], 1000),
    (&[2, 2, 2], 200),
    (&[3, 3, 3], 300),
    (&[4, 4, 4], 400),
    (&[5, 5, 5], 500),
    (&[6, 6, 6], 600),
    // Single dice
    (&[1], 100),
    (&[5], 50),
];

/// The catalog as scoring patterns, in declaration order.
pub fn base_patterns() -> impl Iterator<Item = ScoringPattern> {
    BASE_PATTERNS
        .iter()
        .map(|&(faces, score)| ScoringPattern::new(Dice::from(faces), score))
}

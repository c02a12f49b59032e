//! Dice scoring: multisets, the pattern catalog and the pattern resolver.
//!
//! - `Dice`: canonical sorted multiset of die faces
//! - `ScoringPattern`: dice plus the points they award
//! - `catalog`: the fixed base shapes (n-of-a-kind, straights, single 1s and 5s)
//! - `resolver`: the derived score table and per-roll queries

pub mod dice;
pub mod pattern;
pub mod catalog;
pub mod resolver;

pub use dice::Dice;
pub use pattern::ScoringPattern;
pub use catalog::{base_patterns, BASE_PATTERNS, MAX_PATTERN_SCORE};
pub use resolver::{
    best_pattern_per_length, is_farkle, legal_patterns, score_of, score_table,
    PatternsByLength, ScoreTable,
};

//! Pattern resolver: every achievable scoring pattern and per-roll queries.
//!
//! ## Score Table
//!
//! The table maps each dice multiset that can be assembled from catalog shapes
//! to its best score. It is built bottom-up by pattern length: a pattern of
//! length `L` is either a catalog shape or the union of two known patterns of
//! lengths `A + B = L`. Lengths strictly increase, so one pass over `2..=6`
//! sees every shorter pattern in its final form.
//!
//! ## Ordering
//!
//! Patterns are kept grouped by length, each group in insertion order (catalog
//! shapes first in declaration order, then derived unions as discovered). An
//! improved score updates the entry in place. Queries that return several
//! patterns, and the tie-break in `best_pattern_per_length`, follow this order.
//!
//! ## Usage
//!
//! ```
//! use farkle_engine::scoring::{best_pattern_per_length, is_farkle, score_of};
//! use farkle_engine::Dice;
//!
//! assert_eq!(score_of(&Dice::from([1, 1, 1, 5, 5])), 1100);
//! assert!(is_farkle(&Dice::from([2, 3, 4, 6, 3, 2])));
//!
//! let best = best_pattern_per_length(&Dice::from([1, 1, 1, 5, 5, 2]));
//! assert_eq!(best[2].as_ref().map(|p| p.score), Some(1000));
//! ```

use std::sync::OnceLock;

use rustc_hash::FxHashMap;

use super::catalog::base_patterns;
use super::dice::Dice;
use super::pattern::ScoringPattern;
use crate::core::config::MAX_DICE_COUNT;

/// Best pattern for each length, slot `i` holding length `i + 1`.
pub type PatternsByLength = [Option<ScoringPattern>; MAX_DICE_COUNT];

/// All achievable scoring patterns up to `MAX_DICE_COUNT` dice.
#[derive(Clone, Debug)]
pub struct ScoreTable {
    /// Patterns grouped by length (index 0 unused).
    groups: Vec<Vec<ScoringPattern>>,
    /// Score lookup by multiset.
    scores: FxHashMap<Dice, u32>,
}

impl ScoreTable {
    /// Run the dynamic program over the catalog.
    #[must_use]
    pub fn build() -> Self {
        let mut groups: Vec<Vec<ScoringPattern>> = vec![Vec::new(); MAX_DICE_COUNT + 1];
        let mut positions: FxHashMap<Dice, usize> = FxHashMap::default();

        for pattern in base_patterns() {
            let length = pattern.len();
            record(&mut groups[length], &mut positions, pattern);
        }

        for length in 2..=MAX_DICE_COUNT {
            let (known, rest) = groups.split_at_mut(length);
            let target = &mut rest[0];

            for shorter in 1..=length / 2 {
                let longer = length - shorter;
                for a in &known[shorter] {
                    for b in &known[longer] {
                        record(target, &mut positions, a.combine(b));
                    }
                }
            }
        }

        let scores = groups
            .iter()
            .flatten()
            .map(|p| (p.dice.clone(), p.score))
            .collect();

        Self { groups, scores }
    }

    /// Total number of scoring patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// All patterns, length ascending, each length in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &ScoringPattern> {
        self.groups.iter().flatten()
    }

    /// Patterns using exactly `length` dice.
    #[must_use]
    pub fn patterns_of_length(&self, length: usize) -> &[ScoringPattern] {
        self.groups.get(length).map_or(&[], Vec::as_slice)
    }

    /// Score for holding exactly `dice`, or 0 if it is not a scoring pattern.
    #[must_use]
    pub fn score_of(&self, dice: &Dice) -> u32 {
        self.scores.get(dice).copied().unwrap_or(0)
    }

    /// Every scoring pattern contained in `roll`.
    #[must_use]
    pub fn legal_patterns(&self, roll: &Dice) -> Vec<ScoringPattern> {
        self.contained_in(roll).cloned().collect()
    }

    /// Highest scoring legal pattern for each length.
    ///
    /// Ties keep the pattern that comes first in table order.
    #[must_use]
    pub fn best_pattern_per_length(&self, roll: &Dice) -> PatternsByLength {
        let mut best = PatternsByLength::default();

        for pattern in self.contained_in(roll) {
            let slot = &mut best[pattern.len() - 1];
            if slot.as_ref().map_or(true, |current| pattern.score > current.score) {
                *slot = Some(pattern.clone());
            }
        }

        best
    }

    /// A roll without any scoring pattern.
    #[must_use]
    pub fn is_farkle(&self, roll: &Dice) -> bool {
        self.contained_in(roll).next().is_none()
    }

    fn contained_in<'a>(&'a self, roll: &'a Dice) -> impl Iterator<Item = &'a ScoringPattern> + 'a {
        self.groups
            .iter()
            .take(roll.len() + 1)
            .flatten()
            .filter(move |p| roll.contains(&p.dice))
    }
}

/// Insert `candidate` into its length group, or raise the recorded score.
fn record(group: &mut Vec<ScoringPattern>, positions: &mut FxHashMap<Dice, usize>, candidate: ScoringPattern) {
    match positions.get(&candidate.dice) {
        Some(&index) => {
            if candidate.score > group[index].score {
                group[index].score = candidate.score;
            }
        }
        None => {
            positions.insert(candidate.dice.clone(), group.len());
            group.push(candidate);
        }
    }
}

static SCORE_TABLE: OnceLock<ScoreTable> = OnceLock::new();

/// The process-wide score table, built on first use.
pub fn score_table() -> &'static ScoreTable {
    SCORE_TABLE.get_or_init(|| {
        let table = ScoreTable::build();
        tracing::debug!(patterns = table.len(), "built score table");
        table
    })
}

/// Score for holding exactly `dice` (0 if not a scoring pattern).
pub fn score_of(dice: &Dice) -> u32 {
    score_table().score_of(dice)
}

/// Every scoring pattern contained in `roll`.
pub fn legal_patterns(roll: &Dice) -> Vec<ScoringPattern> {
    score_table().legal_patterns(roll)
}

/// Highest scoring legal pattern for each length 1..=6.
pub fn best_pattern_per_length(roll: &Dice) -> PatternsByLength {
    score_table().best_pattern_per_length(roll)
}

/// True if `roll` contains no scoring pattern.
pub fn is_farkle(roll: &Dice) -> bool {
    score_table().is_farkle(roll)
}

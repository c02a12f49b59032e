//! Scoring patterns: a dice multiset together with the points it awards.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::dice::Dice;

/// A scoring selection of dice.
///
/// Patterns combine additively: the union of two patterns scores at least the
/// sum of both, which is how the score table derives compound patterns such as
/// a triple plus a single.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoringPattern {
    /// The dice this pattern uses.
    pub dice: Dice,
    /// Points awarded for holding exactly these dice.
    pub score: u32,
}

impl ScoringPattern {
    #[must_use]
    pub fn new(dice: Dice, score: u32) -> Self {
        Self { dice, score }
    }

    /// Number of dice the pattern uses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Merge two patterns: multiset union, summed score.
    #[must_use]
    pub fn combine(&self, other: &ScoringPattern) -> ScoringPattern {
        ScoringPattern {
            dice: self.dice.union(&other.dice),
            score: self.score + other.score,
        }
    }
}

impl Add for ScoringPattern {
    type Output = ScoringPattern;

    fn add(self, other: ScoringPattern) -> ScoringPattern {
        self.combine(&other)
    }
}

impl fmt::Display for ScoringPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.dice, self.score)
    }
}

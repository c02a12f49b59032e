//! Canonical dice multisets.
//!
//! A roll or a selected pattern is an unordered multiset of die faces. `Dice`
//! stores it as a sorted `SmallVec`, so two rolls with the same face counts are
//! equal, hash the same and order the same no matter how they were rolled.
//!
//! ```
//! use farkle_engine::Dice;
//!
//! let roll = Dice::from([5, 1, 1]);
//! assert_eq!(roll, Dice::from([1, 5, 1]));
//! assert_eq!(roll.to_string(), "(1, 1, 5)");
//!
//! let held = Dice::from([1, 5]);
//! assert!(roll.contains(&held));
//! assert_eq!(roll.difference(&held), Some(Dice::from([1])));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::MAX_DIE_VALUE;
use crate::core::error::FarkleError;

/// Inline storage for a full roll.
type DiceVec = SmallVec<[u8; 6]>;

/// A sorted multiset of die faces.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "DiceVec", into = "DiceVec")]
pub struct Dice(DiceVec);

impl Dice {
    /// Build a multiset from faces in any order.
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let mut faces: DiceVec = faces.into_iter().collect();
        faces.sort_unstable();
        Self(faces)
    }

    /// The empty multiset.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// `count` copies of `face`.
    #[must_use]
    pub fn repeated(face: u8, count: usize) -> Self {
        Self(SmallVec::from_elem(face, count))
    }

    /// Number of dice.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Faces in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Iterate faces in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }

    /// How many dice show `face`.
    #[must_use]
    pub fn count(&self, face: u8) -> usize {
        self.0.iter().filter(|&&d| d == face).count()
    }

    /// Multiset sum of both sides.
    #[must_use]
    pub fn union(&self, other: &Dice) -> Dice {
        Dice::new(self.iter().chain(other.iter()))
    }

    /// Multiset subtraction.
    ///
    /// Returns `None` when `other` needs a face more often than `self` has it.
    #[must_use]
    pub fn difference(&self, other: &Dice) -> Option<Dice> {
        let mut rest = DiceVec::new();
        let mut needed = other.iter().peekable();

        for die in self.iter() {
            match needed.peek() {
                Some(&face) if face == die => {
                    needed.next();
                }
                // Both sides are sorted: a smaller wanted face can no longer be matched.
                Some(&face) if face < die => return None,
                _ => rest.push(die),
            }
        }

        if needed.peek().is_some() {
            None
        } else {
            Some(Dice(rest))
        }
    }

    /// Check whether `other` is a sub-multiset of `self`.
    #[must_use]
    pub fn contains(&self, other: &Dice) -> bool {
        other.len() <= self.len() && self.difference(other).is_some()
    }
}

impl From<DiceVec> for Dice {
    fn from(mut faces: DiceVec) -> Self {
        faces.sort_unstable();
        Self(faces)
    }
}

impl From<Dice> for DiceVec {
    fn from(dice: Dice) -> Self {
        dice.0
    }
}

impl<const N: usize> From<[u8; N]> for Dice {
    fn from(faces: [u8; N]) -> Self {
        Dice::new(faces)
    }
}

impl From<&[u8]> for Dice {
    fn from(faces: &[u8]) -> Self {
        Dice::new(faces.iter().copied())
    }
}

impl FromIterator<u8> for Dice {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        Dice::new(iter)
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, die) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", die)?;
        }
        write!(f, ")")
    }
}

/// Parses `"1 1 5"`, `"1,1,5"`, `"(1, 1, 5)"` or the compact `"115"`.
impl FromStr for Dice {
    type Err = FarkleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_error = || FarkleError::ParseDice {
            input: s.to_string(),
        };

        let body = s
            .trim()
            .trim_start_matches(['(', '['])
            .trim_end_matches([')', ']']);

        let faces: Option<Vec<u8>> = if body.contains([',', ' ']) {
            body.split([',', ' '])
                .filter(|t| !t.is_empty())
                .map(|t| t.parse::<u8>().ok())
                .collect()
        } else {
            body.chars()
                .map(|c| c.to_digit(10).map(|d| d as u8))
                .collect()
        };

        let faces = faces.ok_or_else(parse_error)?;
        if faces.iter().any(|face| !(1..=MAX_DIE_VALUE).contains(face)) {
            return Err(parse_error());
        }

        Ok(Dice::new(faces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let a = Dice::new([6, 1, 3, 1]);
        let b = Dice::from([1, 3, 1, 6]);

        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[1, 1, 3, 6]);
    }

    #[test]
    fn test_hash_ignores_roll_order() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let hash = |d: &Dice| {
            let mut h = DefaultHasher::new();
            d.hash(&mut h);
            h.finish()
        };

        assert_eq!(hash(&Dice::from([5, 2, 2])), hash(&Dice::from([2, 5, 2])));
    }

    #[test]
    fn test_count() {
        let dice = Dice::from([1, 1, 1, 5, 5, 2]);
        assert_eq!(dice.count(1), 3);
        assert_eq!(dice.count(5), 2);
        assert_eq!(dice.count(4), 0);
    }

    #[test]
    fn test_union() {
        let a = Dice::from([1, 5]);
        let b = Dice::from([1, 1, 1]);

        assert_eq!(a.union(&b), Dice::from([1, 1, 1, 1, 5]));
        assert_eq!(a.union(&Dice::empty()), a);
    }

    #[test]
    fn test_difference() {
        let roll = Dice::from([1, 1, 1, 5, 5, 2]);

        assert_eq!(roll.difference(&Dice::from([1, 1, 1])), Some(Dice::from([2, 5, 5])));
        assert_eq!(roll.difference(&roll), Some(Dice::empty()));
        assert_eq!(roll.difference(&Dice::from([1, 1, 1, 1])), None);
        assert_eq!(roll.difference(&Dice::from([3])), None);
        assert_eq!(roll.difference(&Dice::from([6])), None);
    }

    #[test]
    fn test_contains() {
        let roll = Dice::from([2, 3, 4, 6, 3, 2]);

        assert!(roll.contains(&Dice::from([2, 2, 3])));
        assert!(roll.contains(&Dice::empty()));
        assert!(!roll.contains(&Dice::from([2, 2, 2])));
        assert!(!Dice::from([1]).contains(&Dice::from([1, 1])));
    }

    #[test]
    fn test_repeated() {
        assert_eq!(Dice::repeated(4, 3), Dice::from([4, 4, 4]));
        assert!(Dice::repeated(4, 0).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Dice::from([5, 1]).to_string(), "(1, 5)");
        assert_eq!(Dice::empty().to_string(), "()");
    }

    #[test]
    fn test_parse() {
        let expected = Dice::from([1, 1, 5]);

        assert_eq!("1 1 5".parse::<Dice>().unwrap(), expected);
        assert_eq!("5,1,1".parse::<Dice>().unwrap(), expected);
        assert_eq!("(1, 1, 5)".parse::<Dice>().unwrap(), expected);
        assert_eq!("151".parse::<Dice>().unwrap(), expected);
        assert_eq!("()".parse::<Dice>().unwrap(), Dice::empty());
    }

    #[test]
    fn test_parse_rejects_bad_faces() {
        assert!(matches!("1 7".parse::<Dice>(), Err(FarkleError::ParseDice { .. })));
        assert!("0".parse::<Dice>().is_err());
        assert!("1 x".parse::<Dice>().is_err());
    }

    #[test]
    fn test_display_parse_agree() {
        let dice = Dice::from([6, 2, 2, 4]);
        assert_eq!(dice.to_string().parse::<Dice>().unwrap(), dice);
    }

    #[test]
    fn test_serde_canonicalizes() {
        let dice: Dice = serde_json::from_str("[5, 1, 1]").unwrap();
        assert_eq!(dice.as_slice(), &[1, 1, 5]);

        let json = serde_json::to_string(&dice).unwrap();
        assert_eq!(json, "[1,1,5]");
    }
}

//! One player's turn as a state machine.
//!
//! ## Transitions
//!
//! ```text
//! NotRolled --roll--> Rolled --select_pattern--> NotRolled (score += pattern)
//!     |                  |
//!  end_turn            pass
//!     v                  v
//!   Ended (score kept)  Ended (score lost)
//! ```
//!
//! `pass` is also legal before rolling. Every transition takes `&self` and
//! returns a new `TurnState`; an `Ended` turn accepts nothing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::Parameters;
use super::error::{FarkleError, Result};
use super::rng::DiceSource;
use crate::scoring::{score_of, Dice};

/// State of the current turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnState {
    /// Dice the next roll uses (0 means a full roll).
    pub next_roll_dice_count: u8,
    /// Points accumulated this turn, lost on pass.
    pub score: u32,
    /// The current roll, empty when not rolled.
    pub rolled_dice: Dice,
    /// Dice are on the table waiting for a selection.
    pub has_rolled: bool,
    /// The turn is over.
    pub has_ended: bool,
}

impl TurnState {
    /// A fresh turn with a full roll ahead.
    #[must_use]
    pub fn new(max_dice_count: u8) -> Self {
        Self {
            next_roll_dice_count: max_dice_count,
            score: 0,
            rolled_dice: Dice::empty(),
            has_rolled: false,
            has_ended: false,
        }
    }

    /// Roll the dice.
    pub fn roll(&self, params: &Parameters, dice: &mut impl DiceSource) -> Result<TurnState> {
        if self.has_ended {
            return Err(FarkleError::transition("cannot roll dice when turn has ended"));
        }
        if self.has_rolled {
            return Err(FarkleError::transition("cannot roll dice when dice are already rolled"));
        }

        let count = self.dice_in_hand(params);
        let rolled_dice = dice.roll_dice(count, params.max_die_value);
        tracing::trace!(%rolled_dice, "rolled");

        Ok(TurnState {
            next_roll_dice_count: count,
            score: self.score,
            rolled_dice,
            has_rolled: true,
            has_ended: false,
        })
    }

    /// Hold a scoring pattern from the current roll.
    pub fn select_pattern(&self, pattern: &Dice, params: &Parameters) -> Result<TurnState> {
        if self.has_ended {
            return Err(FarkleError::transition("cannot select a pattern when turn has ended"));
        }
        if !self.has_rolled {
            return Err(FarkleError::transition("cannot select a pattern before rolling"));
        }

        let score = score_of(pattern);
        if score == 0 {
            return Err(FarkleError::pattern(pattern, "not a scoring pattern"));
        }
        if !self.rolled_dice.contains(pattern) {
            return Err(FarkleError::pattern(pattern, "not contained in the rolled dice"));
        }

        let remaining = self.rolled_dice.len() - pattern.len();
        let next_roll_dice_count = if remaining > 0 {
            remaining as u8
        } else {
            params.max_dice_count
        };

        Ok(TurnState {
            next_roll_dice_count,
            score: self.score + score,
            rolled_dice: Dice::empty(),
            has_rolled: false,
            has_ended: false,
        })
    }

    /// Give up the turn, losing its score.
    pub fn pass(&self) -> Result<TurnState> {
        if self.has_ended {
            return Err(FarkleError::transition("cannot pass an ended turn"));
        }

        Ok(Self::ended(0))
    }

    /// End the turn keeping its score. Not allowed with dice on the table.
    pub fn end_turn(&self) -> Result<TurnState> {
        if self.has_ended {
            return Err(FarkleError::transition("cannot end an already ended turn"));
        }
        if self.has_rolled {
            return Err(FarkleError::transition("cannot end turn before selecting from the roll"));
        }

        Ok(Self::ended(self.score))
    }

    /// Dice the next roll will use.
    #[must_use]
    pub fn dice_in_hand(&self, params: &Parameters) -> u8 {
        if self.next_roll_dice_count == 0 {
            params.max_dice_count
        } else {
            self.next_roll_dice_count
        }
    }

    /// True when the last selection used every rolled die.
    #[must_use]
    pub fn is_hot_dice(&self, params: &Parameters) -> bool {
        !self.has_rolled && !self.has_ended && self.score > 0 && self.next_roll_dice_count == params.max_dice_count
    }

    fn ended(score: u32) -> TurnState {
        TurnState {
            next_roll_dice_count: 0,
            score,
            rolled_dice: Dice::empty(),
            has_rolled: false,
            has_ended: true,
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_ended {
            write!(f, "ended with {}", self.score)
        } else if self.has_rolled {
            write!(f, "rolled {}, turn score {}", self.rolled_dice, self.score)
        } else {
            write!(f, "{} dice to roll, turn score {}", self.next_roll_dice_count, self.score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;

    fn params() -> Parameters {
        Parameters::default()
    }

    fn rolled(faces: &[u8], score: u32) -> TurnState {
        TurnState {
            next_roll_dice_count: faces.len() as u8,
            score,
            rolled_dice: Dice::from(faces),
            has_rolled: true,
            has_ended: false,
        }
    }

    #[test]
    fn test_new_turn() {
        let turn = TurnState::new(6);

        assert_eq!(turn.next_roll_dice_count, 6);
        assert_eq!(turn.score, 0);
        assert!(!turn.has_rolled);
        assert!(!turn.has_ended);
    }

    #[test]
    fn test_roll() {
        let mut dice = ScriptedDice::new([3, 1, 4, 1, 5, 2]);
        let turn = TurnState::new(6).roll(&params(), &mut dice).unwrap();

        assert!(turn.has_rolled);
        assert_eq!(turn.rolled_dice, Dice::from([1, 1, 2, 3, 4, 5]));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_roll_twice_fails() {
        let mut dice = ScriptedDice::new([1; 12]);
        let turn = TurnState::new(6).roll(&params(), &mut dice).unwrap();

        let err = turn.roll(&params(), &mut dice).unwrap_err();
        assert!(matches!(err, FarkleError::InvalidTransition { .. }));
        assert_eq!(dice.remaining(), 6);
    }

    #[test]
    fn test_roll_after_end_fails() {
        let ended = TurnState::new(6).pass().unwrap();
        let mut dice = ScriptedDice::new([1; 6]);

        assert!(matches!(
            ended.roll(&params(), &mut dice),
            Err(FarkleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_zero_dice_count_rolls_full_hand() {
        let mut turn = TurnState::new(6);
        turn.next_roll_dice_count = 0;

        let mut dice = ScriptedDice::new([2; 6]);
        let turn = turn.roll(&params(), &mut dice).unwrap();
        assert_eq!(turn.rolled_dice.len(), 6);
    }

    #[test]
    fn test_select_pattern() {
        let turn = rolled(&[1, 1, 1, 5, 5, 2], 250);
        let next = turn.select_pattern(&Dice::from([1, 1, 1]), &params()).unwrap();

        assert_eq!(next.score, 1250);
        assert_eq!(next.next_roll_dice_count, 3);
        assert!(next.rolled_dice.is_empty());
        assert!(!next.has_rolled);
    }

    #[test]
    fn test_select_hot_dice() {
        let turn = rolled(&[1, 1, 1, 5, 5], 0);
        let next = turn.select_pattern(&Dice::from([1, 1, 1, 5, 5]), &params()).unwrap();

        assert_eq!(next.score, 1100);
        assert_eq!(next.next_roll_dice_count, 6);
        assert!(next.is_hot_dice(&params()));
    }

    #[test]
    fn test_select_non_scoring_pattern_fails() {
        let turn = rolled(&[1, 1, 1, 5, 5, 2], 0);

        let err = turn.select_pattern(&Dice::from([2]), &params()).unwrap_err();
        assert!(matches!(err, FarkleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_select_pattern_not_in_roll_fails() {
        let turn = rolled(&[1, 2, 3], 0);

        let err = turn.select_pattern(&Dice::from([1, 1]), &params()).unwrap_err();
        assert!(matches!(err, FarkleError::InvalidPattern { .. }));
    }

    #[test]
    fn test_select_before_roll_fails() {
        let err = TurnState::new(6).select_pattern(&Dice::from([1]), &params()).unwrap_err();
        assert!(matches!(err, FarkleError::InvalidTransition { .. }));
    }

    #[test]
    fn test_pass_discards_score() {
        let turn = rolled(&[2, 3, 4, 6, 3, 2], 900);
        let passed = turn.pass().unwrap();

        assert_eq!(passed.score, 0);
        assert!(passed.has_ended);
        assert!(passed.rolled_dice.is_empty());
        assert!(passed.pass().is_err());
    }

    #[test]
    fn test_end_turn_keeps_score() {
        let turn = rolled(&[1, 4], 300).select_pattern(&Dice::from([1]), &params()).unwrap();
        let ended = turn.end_turn().unwrap();

        assert_eq!(ended.score, 400);
        assert!(ended.has_ended);
    }

    #[test]
    fn test_end_turn_mid_roll_fails() {
        let err = rolled(&[1, 4], 300).end_turn().unwrap_err();
        assert!(matches!(err, FarkleError::InvalidTransition { .. }));
    }

    #[test]
    fn test_end_turn_twice_fails() {
        let ended = TurnState::new(6).end_turn().unwrap();
        assert!(ended.end_turn().is_err());
    }

    #[test]
    fn test_transitions_leave_input_untouched() {
        let turn = rolled(&[1, 5], 100);
        let snapshot = turn.clone();

        let _ = turn.select_pattern(&Dice::from([1]), &params()).unwrap();
        let _ = turn.pass().unwrap();

        assert_eq!(turn, snapshot);
    }

    #[test]
    fn test_display() {
        assert_eq!(TurnState::new(6).to_string(), "6 dice to roll, turn score 0");
        assert_eq!(rolled(&[5, 1], 50).to_string(), "rolled (1, 5), turn score 50");
        assert_eq!(TurnState::new(6).pass().unwrap().to_string(), "ended with 0");
    }
}

//! Player actions.
//!
//! The action set is closed: hold a scoring pattern and keep rolling, hold a
//! pattern and bank, give up the turn, or leave the game. Collaborators (UIs,
//! RL wrappers, agents) translate their own inputs into these values.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::scoring::Dice;

/// A complete player action.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Hold `pattern` from the current roll and roll the remaining dice.
    Continue(Dice),
    /// Hold `pattern` from the current roll and bank the turn score.
    Bank(Dice),
    /// Give up the turn and its score, typically after a farkle.
    Pass,
    /// Abandon the game.
    Quit,
}

impl Action {
    /// The dice this action holds, if any.
    #[must_use]
    pub fn pattern(&self) -> Option<&Dice> {
        match self {
            Action::Continue(dice) | Action::Bank(dice) => Some(dice),
            Action::Pass | Action::Quit => None,
        }
    }

    /// True for actions that end the current player's turn.
    ///
    /// `Quit` counts: it ends the game, and the turn with it.
    #[must_use]
    pub fn ends_turn(&self) -> bool {
        !matches!(self, Action::Continue(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Continue(dice) => write!(f, "continue {}", dice),
            Action::Bank(dice) => write!(f, "bank {}", dice),
            Action::Pass => write!(f, "pass"),
            Action::Quit => write!(f, "quit"),
        }
    }
}

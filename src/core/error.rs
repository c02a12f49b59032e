//! Engine errors.
//!
//! All errors are local validation failures raised at the offending call. The
//! engine never retries or recovers; the input state is left untouched.

use thiserror::Error;

use crate::scoring::Dice;

/// Errors returned by turn, game and engine transitions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FarkleError {
    /// A turn precondition was violated (rolling twice, banking mid-roll, ...).
    #[error("invalid transition: {reason}")]
    InvalidTransition { reason: &'static str },

    /// The selected dice do not score or are not part of the current roll.
    #[error("invalid pattern {pattern}: {reason}")]
    InvalidPattern { pattern: Dice, reason: &'static str },

    /// The game has a winner or was quit.
    #[error("game is already over")]
    GameAlreadyOver,

    /// Parameters no game can be played with.
    #[error("invalid parameters: {reason}")]
    InvalidParameters { reason: &'static str },

    /// Text that does not describe dice faces.
    #[error("cannot parse dice from {input:?}")]
    ParseDice { input: String },
}

impl FarkleError {
    pub(crate) fn transition(reason: &'static str) -> Self {
        Self::InvalidTransition { reason }
    }

    pub(crate) fn pattern(pattern: &Dice, reason: &'static str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.clone(),
            reason,
        }
    }
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, FarkleError>;

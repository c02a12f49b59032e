//! Rules engine trait.
//!
//! The seam between game rules and their consumers (UIs, RL environments,
//! search agents):
//! - What actions are legal
//! - How actions produce the successor state
//! - When the game is over

use crate::core::action::Action;
use crate::core::error::Result;
use crate::core::player::PlayerId;
use crate::core::rng::DiceSource;
use crate::core::state::GameState;

/// Result of a finished game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// A player reached the winning score.
    Winner(PlayerId),
    /// The game was quit before anyone won.
    Abandoned,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec once the game is over
/// - `apply_action`: Pure in `state`; all randomness comes from `dice`
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Enumerate all legal actions for the player to move.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Produce the successor state, or fail without side effects on `state`.
    fn apply_action(&self, state: &GameState, action: &Action, dice: &mut impl DiceSource) -> Result<GameState>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult>;

    /// Check whether `action` is among the legal actions.
    fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        self.legal_actions(state).contains(action)
    }
}

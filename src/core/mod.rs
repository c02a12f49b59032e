//! Core engine types: players, parameters, actions, errors, RNG, turn and game state.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;
pub mod turn;
pub mod state;

pub use player::{PlayerId, PlayerMap};
pub use rng::{DiceSource, GameRng, GameRngState, ScriptedDice};
pub use config::{Parameters, DEFAULT_PLAYER_COUNT, DEFAULT_SCORE_TO_WIN, MAX_DICE_COUNT, MAX_DIE_VALUE};
pub use error::{FarkleError, Result};
pub use action::Action;
pub use turn::TurnState;
pub use state::GameState;

//! # farkle-engine
//!
//! A rules engine for the dice game Farkle, built for UIs, RL environments
//! and search agents.
//!
//! ## Design Principles
//!
//! 1. **Values, not objects**: Every transition returns a new `GameState`
//!    and leaves its input untouched. Agents can branch from any state.
//!
//! 2. **Injected randomness**: All dice come from a `DiceSource`. Seed a
//!    `GameRng` for reproducible games, or script the faces in tests.
//!
//! 3. **N-Player First**: Seats rotate over `player_count`; nothing assumes
//!    two players.
//!
//! ## Architecture
//!
//! - **Precomputed scoring**: Every scoring multiset of up to six dice is
//!   derived once from a small catalog and cached for the process.
//!
//! - **Persistent Data Structures**: O(1) cloning of per-player scores via
//!   `im-rs`.
//!
//! ## Modules
//!
//! - `core`: Players, parameters, actions, errors, RNG, turn and game state
//! - `scoring`: Dice multisets, the pattern catalog and the score table
//! - `rules`: RulesEngine trait for game implementations
//! - `games`: The Farkle engine
//!
//! ## Example
//!
//! ```
//! use farkle_engine::{apply, legal_actions, FarkleEngine, GameRng, Parameters};
//!
//! let mut rng = GameRng::new(7);
//! let mut state = FarkleEngine::new()
//!     .new_game(Parameters::default(), &mut rng)
//!     .unwrap();
//!
//! while !state.is_over() && state.turn < 20 {
//!     let actions = legal_actions(&state);
//!     let action = rng.choose(&actions).unwrap().clone();
//!     state = apply(&state, &action, &mut rng).unwrap();
//! }
//! ```

pub mod core;
pub mod scoring;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap,
    DiceSource, GameRng, GameRngState, ScriptedDice,
    Parameters, DEFAULT_PLAYER_COUNT, DEFAULT_SCORE_TO_WIN, MAX_DICE_COUNT, MAX_DIE_VALUE,
    FarkleError, Result,
    Action, TurnState, GameState,
};

pub use crate::scoring::{
    Dice, ScoringPattern, ScoreTable, PatternsByLength,
    best_pattern_per_length, is_farkle, legal_patterns, score_of,
    MAX_PATTERN_SCORE,
};

pub use crate::rules::{RulesEngine, GameResult};

pub use crate::games::farkle::{apply, legal_actions, FarkleEngine};

//! Rules engine trait for game implementations.
//!
//! Rules implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions produce successor states
//! - Win/abandon conditions

pub mod engine;

pub use engine::{GameResult, RulesEngine};

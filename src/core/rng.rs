//! Injected randomness for dice rolls.
//!
//! The engine never owns a random source. Every roll draws from a
//! `DiceSource` supplied by the caller, so a fixed seed and action sequence
//! replay the same game.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Forkable**: Independent branches for search agents exploring alternatives
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use farkle_engine::{DiceSource, GameRng};
//!
//! let mut rng = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//! assert_eq!(rng.roll_dice(6, 6), replay.roll_dice(6, 6));
//!
//! // Fork for a search branch without disturbing the main sequence
//! let mut branch = rng.fork();
//! let _ = branch.roll_die(6);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::scoring::Dice;

/// A source of die rolls.
pub trait DiceSource {
    /// Roll one die showing `1..=faces`.
    fn roll_die(&mut self, faces: u8) -> u8;

    /// Roll `count` independent dice.
    fn roll_dice(&mut self, count: u8, faces: u8) -> Dice {
        (0..count).map(|_| self.roll_die(faces)).collect()
    }
}

/// Deterministic RNG with forking.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl DiceSource for GameRng {
    fn roll_die(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many dice have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Dice source replaying a fixed list of faces.
///
/// Meant for tests and tutorials that need a specific roll.
///
/// # Panics
///
/// Rolling past the end of the script panics, as does a scripted face that
/// the die being rolled cannot show.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, faces: u8) -> u8 {
        let Some(face) = self.faces.pop_front() else {
            panic!("Dice script exhausted");
        };
        assert!(
            (1..=faces).contains(&face),
            "Scripted face {} is not on a {}-sided die",
            face,
            faces
        );
        face
    }
}

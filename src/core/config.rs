//! Game parameters.
//!
//! A game is configured once at startup and the parameters never change
//! afterwards. Defaults match the standard two-player game to 5000 points:
//!
//! ```
//! use farkle_engine::Parameters;
//!
//! let params = Parameters::default()
//!     .with_player_count(4)
//!     .with_score_to_win(10_000);
//!
//! assert_eq!(params.player_count, 4);
//! assert_eq!(params.max_dice_count, 6);
//! ```

use serde::{Deserialize, Serialize};

use super::error::{FarkleError, Result};

/// Points needed to win when not configured.
pub const DEFAULT_SCORE_TO_WIN: u32 = 5000;

/// Players in a default game.
pub const DEFAULT_PLAYER_COUNT: usize = 2;

/// Dice in a full roll.
pub const MAX_DICE_COUNT: usize = 6;

/// Faces on each die.
pub const MAX_DIE_VALUE: u8 = 6;

const TOO_FEW_PLAYERS: &str = "Must have at least 2 players";
const TOO_MANY_PLAYERS: &str = "At most 255 players supported";
const NO_SCORE_TO_WIN: &str = "Score to win must be positive";
const BAD_DICE_COUNT: &str = "Dice per roll must be between 1 and 6";
const NO_DIE_FACES: &str = "Dice must have at least one face";

/// Immutable parameters of a Farkle game.
///
/// Deserialization runs the same checks as [`Parameters::validate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct Parameters {
    /// Number of players (2-255).
    pub player_count: usize,

    /// Banked total that ends the game.
    pub score_to_win: u32,

    /// Dice rolled at the start of a turn and after hot dice.
    pub max_dice_count: u8,

    /// Highest face on a die.
    pub max_die_value: u8,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            score_to_win: DEFAULT_SCORE_TO_WIN,
            max_dice_count: MAX_DICE_COUNT as u8,
            max_die_value: MAX_DIE_VALUE,
        }
    }
}

impl Parameters {
    /// Default parameters for `player_count` players.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self::default().with_player_count(player_count)
    }

    /// Set the number of players.
    #[must_use]
    pub fn with_player_count(mut self, count: usize) -> Self {
        assert!(count >= 2, "{}", TOO_FEW_PLAYERS);
        assert!(count <= 255, "{}", TOO_MANY_PLAYERS);
        self.player_count = count;
        self
    }

    /// Set the winning score.
    #[must_use]
    pub fn with_score_to_win(mut self, score: u32) -> Self {
        assert!(score > 0, "{}", NO_SCORE_TO_WIN);
        self.score_to_win = score;
        self
    }

    /// Check the parameters a game can be played with.
    ///
    /// The fields are public, so a struct literal can hold anything; games only
    /// start from parameters that pass this check.
    pub fn validate(&self) -> Result<()> {
        let reason = if self.player_count < 2 {
            TOO_FEW_PLAYERS
        } else if self.player_count > 255 {
            TOO_MANY_PLAYERS
        } else if self.score_to_win == 0 {
            NO_SCORE_TO_WIN
        } else if !(1..=MAX_DICE_COUNT).contains(&(self.max_dice_count as usize)) {
            BAD_DICE_COUNT
        } else if self.max_die_value == 0 {
            NO_DIE_FACES
        } else {
            return Ok(());
        };

        Err(FarkleError::InvalidParameters { reason })
    }
}

/// Wire form of [`Parameters`], checked on the way in.
#[derive(Deserialize)]
struct RawParameters {
    player_count: usize,
    score_to_win: u32,
    max_dice_count: u8,
    max_die_value: u8,
}

impl TryFrom<RawParameters> for Parameters {
    type Error = FarkleError;

    fn try_from(raw: RawParameters) -> Result<Self> {
        let params = Parameters {
            player_count: raw.player_count,
            score_to_win: raw.score_to_win,
            max_dice_count: raw.max_dice_count,
            max_die_value: raw.max_die_value,
        };
        params.validate()?;
        Ok(params)
    }
}

//! Farkle.
//!
//! Players take turns rolling up to six dice, holding scoring patterns and
//! either re-rolling the rest or banking the turn score. A roll with no scoring
//! pattern (a farkle) loses the unbanked score and passes the dice on. The
//! first player to bank `score_to_win` points wins.
//!
//! Supports any number of players from 2 upward.

mod game;

pub use game::{apply, legal_actions, FarkleEngine};

//! Farkle rules: action validation, turn hand-over and farkle auto-advance.

use tracing::{debug, info};

use crate::core::{Action, DiceSource, FarkleError, GameState, Parameters, Result};
use crate::rules::{GameResult, RulesEngine};
use crate::scoring::{is_farkle, legal_patterns, score_of, Dice};

/// The Farkle rules engine.
///
/// Stateless: every call takes the state it works on and returns a new one.
#[derive(Clone, Copy, Debug, Default)]
pub struct FarkleEngine;

impl FarkleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Start a game: player 0 rolls, farkled openings pass to the next seat.
    ///
    /// Fails with `InvalidParameters` before any roll if `parameters` are unplayable.
    pub fn new_game(&self, parameters: Parameters, dice: &mut impl DiceSource) -> Result<GameState> {
        let state = GameState::new(parameters)?.roll_dice(dice)?;
        settle_farkles(state, dice)
    }

    /// Validate `pattern` and hold it from the current roll.
    fn hold(&self, state: &GameState, pattern: &Dice) -> Result<GameState> {
        if score_of(pattern) == 0 {
            return Err(FarkleError::pattern(pattern, "not a scoring pattern"));
        }
        let held = state.select_pattern(pattern)?;
        debug!(
            player = %state.current_player,
            %pattern,
            turn_score = held.turn_state.score,
            "held pattern"
        );
        Ok(held)
    }
}

/// Hand the dice to the next player and roll for them.
fn next_player_rolls(state: &GameState, dice: &mut impl DiceSource) -> Result<GameState> {
    state.start_turn()?.roll_dice(dice)
}

/// Auto-pass farkled rolls until someone has a scoring roll.
///
/// Each pass hands a full six-dice roll to the next seat, which farkles with
/// probability 1440/46656 (about 3%), so the loop ends after very few rounds in
/// practice. It has no hard cap: every iteration consumes one fresh roll.
fn settle_farkles(mut state: GameState, dice: &mut impl DiceSource) -> Result<GameState> {
    let mut farkles = 0u32;

    while state.turn_state.has_rolled && is_farkle(&state.turn_state.rolled_dice) {
        farkles += 1;
        debug!(
            player = %state.current_player,
            rolled = %state.turn_state.rolled_dice,
            lost = state.turn_state.score,
            "farkle"
        );
        state = next_player_rolls(&state.pass_turn()?, dice)?;
    }

    if farkles > 1 {
        debug!(farkles, player = %state.current_player, "chained farkles settled");
    }

    Ok(state)
}

impl RulesEngine for FarkleEngine {
    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        if state.is_over() {
            return Vec::new();
        }

        let mut actions = vec![Action::Pass];

        if state.turn_state.has_rolled {
            for pattern in legal_patterns(&state.turn_state.rolled_dice) {
                actions.push(Action::Continue(pattern.dice.clone()));
                actions.push(Action::Bank(pattern.dice));
            }
        }

        actions
    }

    fn apply_action(&self, state: &GameState, action: &Action, dice: &mut impl DiceSource) -> Result<GameState> {
        if state.is_over() {
            return Err(FarkleError::GameAlreadyOver);
        }

        let next = match action {
            Action::Continue(pattern) => self.hold(state, pattern)?.roll_dice(dice)?,
            Action::Bank(pattern) => {
                let banked = self.hold(state, pattern)?.end_turn()?;
                debug!(
                    player = %state.current_player,
                    banked = banked.turn_state.score,
                    total = banked.score(state.current_player),
                    "bank"
                );

                if let Some(winner) = banked.winner {
                    info!(%winner, score = banked.score(winner), turn = banked.turn, "game won");
                    return Ok(banked);
                }

                next_player_rolls(&banked, dice)?
            }
            Action::Pass => {
                debug!(player = %state.current_player, lost = state.turn_state.score, "pass");
                next_player_rolls(&state.pass_turn()?, dice)?
            }
            Action::Quit => {
                debug!(player = %state.current_player, "quit");
                return state.quit();
            }
        };

        settle_farkles(next, dice)
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        match state.winner {
            Some(winner) => Some(GameResult::Winner(winner)),
            None if state.is_quit => Some(GameResult::Abandoned),
            None => None,
        }
    }
}

/// Legal actions for the player to move.
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    FarkleEngine.legal_actions(state)
}

/// Apply `action` to `state`, rolling from `dice`.
pub fn apply(state: &GameState, action: &Action, dice: &mut impl DiceSource) -> Result<GameState> {
    FarkleEngine.apply_action(state, action, dice)
}

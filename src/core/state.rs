//! Game state: banked scores, seat rotation and game end.
//!
//! `GameState` composes a `TurnState` with the per-player totals. Like the turn
//! machine it is a value: each transition returns a new state and leaves the
//! receiver alone, so search agents can branch from any state.
//!
//! ## Invariants
//!
//! - `parameters` passed `Parameters::validate` when the game was created
//! - `current_player` is always a seat of this game
//! - `winner` is set when a bank lifts a total to `score_to_win`, and is never unset
//! - once `winner` or `is_quit` is set, every transition fails with `GameAlreadyOver`

use std::fmt;

use serde::{Deserialize, Serialize};

use super::config::Parameters;
use super::error::{FarkleError, Result};
use super::player::{PlayerId, PlayerMap};
use super::rng::DiceSource;
use super::turn::TurnState;
use crate::scoring::Dice;

/// Complete state of a Farkle game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Game parameters (immutable).
    pub parameters: Parameters,

    /// The turn in progress.
    pub turn_state: TurnState,

    /// Banked totals per player.
    pub player_scores: PlayerMap<u32>,

    /// Player whose turn it is.
    pub current_player: PlayerId,

    /// Set once a player reaches `score_to_win`.
    pub winner: Option<PlayerId>,

    /// Completed rotations (starts at 0, increments when play returns to player 0).
    pub turn: u32,

    /// The game was abandoned.
    pub is_quit: bool,
}

impl GameState {
    /// A new game: player 0 to roll, all scores zero.
    ///
    /// Fails with `InvalidParameters` unless `parameters` pass
    /// [`Parameters::validate`].
    pub fn new(parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            turn_state: TurnState::new(parameters.max_dice_count),
            player_scores: PlayerMap::with_value(parameters.player_count, 0),
            current_player: PlayerId::new(0),
            winner: None,
            turn: 0,
            is_quit: false,
        })
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.parameters.player_count
    }

    /// True once a winner is declared or the game was quit.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winner.is_some() || self.is_quit
    }

    /// A player's banked total.
    #[must_use]
    pub fn score(&self, player: PlayerId) -> u32 {
        self.player_scores[player]
    }

    /// The current player's banked total plus the unbanked turn score.
    #[must_use]
    pub fn current_score(&self) -> u32 {
        self.score(self.current_player) + self.turn_state.score
    }

    /// Player with the highest banked total (lowest seat on ties).
    #[must_use]
    pub fn leader(&self) -> PlayerId {
        self.player_scores
            .iter()
            .fold((PlayerId::new(0), 0), |best, (player, &score)| {
                if score > best.1 {
                    (player, score)
                } else {
                    best
                }
            })
            .0
    }

    // === Turn Transitions ===

    /// Roll the dice for the current player.
    pub fn roll_dice(&self, dice: &mut impl DiceSource) -> Result<GameState> {
        self.ensure_running()?;
        let turn_state = self.turn_state.roll(&self.parameters, dice)?;
        Ok(self.with_turn(turn_state))
    }

    /// Hold a scoring pattern from the current roll.
    pub fn select_pattern(&self, pattern: &Dice) -> Result<GameState> {
        self.ensure_running()?;
        let turn_state = self.turn_state.select_pattern(pattern, &self.parameters)?;
        Ok(self.with_turn(turn_state))
    }

    /// End the current turn without banking. The turn score is lost.
    pub fn pass_turn(&self) -> Result<GameState> {
        self.ensure_running()?;
        let turn_state = self.turn_state.pass()?;
        Ok(self.with_turn(turn_state))
    }

    /// End the current turn and bank its score.
    ///
    /// Declares the current player the winner when the new total reaches
    /// `score_to_win`.
    pub fn end_turn(&self) -> Result<GameState> {
        self.ensure_running()?;
        let turn_state = self.turn_state.end_turn()?;

        let mut player_scores = self.player_scores.clone();
        player_scores[self.current_player] += turn_state.score;

        let total = player_scores[self.current_player];
        let winner = if total >= self.parameters.score_to_win {
            Some(self.current_player)
        } else {
            None
        };

        Ok(GameState {
            turn_state,
            player_scores,
            winner,
            ..self.clone()
        })
    }

    /// Hand the dice to the next player. The current turn must have ended.
    pub fn start_turn(&self) -> Result<GameState> {
        self.ensure_running()?;
        if !self.turn_state.has_ended {
            return Err(FarkleError::transition("cannot start a turn before the current one ends"));
        }

        let current_player = self.current_player.next(self.player_count());
        let turn = if current_player.index() == 0 {
            self.turn + 1
        } else {
            self.turn
        };

        Ok(GameState {
            turn_state: TurnState::new(self.parameters.max_dice_count),
            current_player,
            turn,
            ..self.clone()
        })
    }

    /// Abandon the game. Scores are left as they are.
    pub fn quit(&self) -> Result<GameState> {
        self.ensure_running()?;
        Ok(GameState {
            is_quit: true,
            ..self.clone()
        })
    }

    fn ensure_running(&self) -> Result<()> {
        if self.is_over() {
            Err(FarkleError::GameAlreadyOver)
        } else {
            Ok(())
        }
    }

    fn with_turn(&self, turn_state: TurnState) -> GameState {
        GameState {
            turn_state,
            ..self.clone()
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Turn {}, {} to play", self.turn, self.current_player)?;
        writeln!(f, "Scores: {:?}", self.player_scores.to_vec())?;
        write!(f, "Current turn: {}", self.turn_state)?;
        if let Some(winner) = self.winner {
            write!(f, "\nWinner: {}", winner)?;
        } else if self.is_quit {
            write!(f, "\nGame quit")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::ScriptedDice;

    fn rolled_state(params: Parameters, faces: &[u8]) -> GameState {
        let mut dice = ScriptedDice::new(faces.iter().copied());
        let mut state = GameState::new(params).unwrap();
        state.turn_state.next_roll_dice_count = faces.len() as u8;
        state.roll_dice(&mut dice).unwrap()
    }

    #[test]
    fn test_new_game() {
        let state = GameState::new(Parameters::new(3)).unwrap();

        assert_eq!(state.player_count(), 3);
        assert_eq!(state.player_scores.to_vec(), vec![0, 0, 0]);
        assert_eq!(state.current_player, PlayerId::new(0));
        assert_eq!(state.turn, 0);
        assert_eq!(state.turn_state, TurnState::new(6));
        assert!(!state.is_over());
    }

    #[test]
    fn test_new_game_rejects_invalid_parameters() {
        let no_dice = Parameters {
            max_dice_count: 0,
            ..Parameters::default()
        };
        let crowded = Parameters {
            player_count: 300,
            ..Parameters::default()
        };

        assert!(matches!(GameState::new(no_dice), Err(FarkleError::InvalidParameters { .. })));
        assert!(matches!(GameState::new(crowded), Err(FarkleError::InvalidParameters { .. })));
    }

    #[test]
    fn test_bank_adds_turn_score() {
        let state = rolled_state(Parameters::default(), &[1, 1, 1, 2, 3, 4]);
        let state = state.select_pattern(&Dice::from([1, 1, 1])).unwrap();
        let banked = state.end_turn().unwrap();

        assert_eq!(banked.score(PlayerId::new(0)), 1000);
        assert_eq!(banked.score(PlayerId::new(1)), 0);
        assert_eq!(banked.winner, None);
        assert!(banked.turn_state.has_ended);
    }

    #[test]
    fn test_bank_declares_winner() {
        let params = Parameters::default().with_score_to_win(1000);
        let state = rolled_state(params, &[1, 1, 1, 2, 3, 4]);
        let state = state.select_pattern(&Dice::from([1, 1, 1])).unwrap();
        let banked = state.end_turn().unwrap();

        assert_eq!(banked.winner, Some(PlayerId::new(0)));
        assert!(banked.is_over());
    }

    #[test]
    fn test_pass_never_banks() {
        let state = rolled_state(Parameters::default(), &[1, 5, 2]);
        let state = state.select_pattern(&Dice::from([1, 5])).unwrap();
        assert_eq!(state.current_score(), 150);

        let passed = state.pass_turn().unwrap();
        assert_eq!(passed.score(PlayerId::new(0)), 0);
        assert_eq!(passed.turn_state.score, 0);
    }

    #[test]
    fn test_start_turn_rotates_and_counts() {
        let mut state = GameState::new(Parameters::new(3)).unwrap();
        let mut seats = Vec::new();

        for _ in 0..4 {
            state = state.pass_turn().unwrap().start_turn().unwrap();
            seats.push((state.current_player.index(), state.turn));
        }

        assert_eq!(seats, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
        assert_eq!(state.turn_state, TurnState::new(6));
    }

    #[test]
    fn test_start_turn_requires_ended_turn() {
        let state = GameState::new(Parameters::default()).unwrap();
        assert!(matches!(
            state.start_turn(),
            Err(FarkleError::InvalidTransition { .. })
        ));
    }

    #[test]
    fn test_quit_is_terminal() {
        let state = GameState::new(Parameters::default()).unwrap().quit().unwrap();
        let mut dice = ScriptedDice::new([1; 6]);

        assert!(state.is_quit);
        assert_eq!(state.roll_dice(&mut dice), Err(FarkleError::GameAlreadyOver));
        assert_eq!(state.pass_turn(), Err(FarkleError::GameAlreadyOver));
        assert_eq!(state.quit(), Err(FarkleError::GameAlreadyOver));
    }

    #[test]
    fn test_winner_blocks_further_transitions() {
        let mut state = GameState::new(Parameters::default()).unwrap();
        state.winner = Some(PlayerId::new(1));

        assert_eq!(state.end_turn(), Err(FarkleError::GameAlreadyOver));
        assert_eq!(state.start_turn(), Err(FarkleError::GameAlreadyOver));
    }

    #[test]
    fn test_leader() {
        let mut state = GameState::new(Parameters::new(3)).unwrap();
        assert_eq!(state.leader(), PlayerId::new(0));

        state.player_scores[PlayerId::new(2)] = 700;
        state.player_scores[PlayerId::new(1)] = 700;
        assert_eq!(state.leader(), PlayerId::new(1));
    }

    #[test]
    fn test_transitions_leave_input_untouched() {
        let state = rolled_state(Parameters::default(), &[1, 1, 1, 2, 3, 4]);
        let snapshot = state.clone();

        let _ = state.select_pattern(&Dice::from([1])).unwrap();
        let _ = state.pass_turn().unwrap();

        assert_eq!(state, snapshot);
    }

    #[test]
    fn test_state_serialization() {
        let state = rolled_state(Parameters::new(4), &[5, 5, 2]);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_display() {
        let state = GameState::new(Parameters::default()).unwrap();
        let text = state.to_string();

        assert!(text.starts_with("Turn 0, Player 0 to play"));
        assert!(text.contains("Scores: [0, 0]"));
    }
}

//! Game engine - the call surface for input and presentation layers
//!
//! Every intent is resolved completely (placement, both capture rules, turn
//! switch, end check) before the call returns. The engine is not shared:
//! whoever owns it serializes calls, e.g. behind a mutex in a server.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::ai;
use crate::animals::Animal;
use crate::board::Hex;
use crate::config::{GameConfig, GameMode};
use crate::error::{ConfigError, MoveError};
use crate::game::{
    BoardSnapshot, FinalScore, GameState, GameStatus, MoveOutcome, MoveResult, Player, Score,
};

/// Orchestrates one game: turn order, legality, AI moves and restarts
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
}

impl GameEngine {
    /// Start a player-vs-player game on a board of the given radius
    pub fn new(radius: u8) -> Result<Self, ConfigError> {
        Self::with_config(GameConfig::with_radius(radius))
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            state: GameState::new(config.board_radius)?,
            config,
        })
    }

    /// Resume from a snapshot. The radius comes from the snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot, mode: GameMode) -> Result<Self, ConfigError> {
        let config = GameConfig {
            board_radius: snapshot.radius,
            mode,
        };
        config.validate()?;
        Ok(Self {
            state: GameState::from_snapshot(snapshot)?,
            config,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    pub fn is_ended(&self) -> bool {
        self.state.is_ended()
    }

    pub fn final_score(&self) -> Option<FinalScore> {
        self.state.final_score()
    }

    pub fn score(&self) -> Score {
        self.state.score()
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        self.state.snapshot()
    }

    /// True when the computer side is to move in an unfinished game
    pub fn is_ai_turn(&self) -> bool {
        !self.is_ended() && self.config.mode.ai_side() == Some(self.current_player())
    }

    /// Every empty cell. Any animal may go on any of them, so the list does
    /// not depend on which animal the caller has in mind.
    pub fn legal_moves(&self) -> Vec<Hex> {
        self.state.legal_moves()
    }

    // ========================================================================
    // INTENTS
    // ========================================================================

    /// Human intent: place `animal` for the player to move at `hex`.
    /// Rejected with `NotYourTurn` while the computer side is to move.
    pub fn submit_move(&mut self, hex: Hex, animal: Animal) -> MoveResult {
        if self.is_ai_turn() {
            let err = MoveError::NotYourTurn(self.current_player());
            debug!(%hex, %animal, %err, "move rejected");
            return Err(err);
        }
        self.apply(hex, animal)
    }

    /// Let the random selector move for the player to move. The same seed on
    /// the same position always plays the same move. In player-vs-AI mode it
    /// only moves for the computer side.
    pub fn request_ai_move(&mut self, seed: u64) -> MoveResult {
        if self.is_ended() {
            return Err(MoveError::GameAlreadyEnded);
        }
        if let Some(ai_side) = self.config.mode.ai_side() {
            if ai_side != self.current_player() {
                return Err(MoveError::NotYourTurn(self.current_player()));
            }
        }

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let (hex, animal) = ai::choose_move(&self.state, &mut rng).ok_or(MoveError::GameAlreadyEnded)?;
        debug!(seed, %hex, %animal, "ai move chosen");
        self.apply(hex, animal)
    }

    /// Restart on the same board size and mode
    pub fn reset(&mut self) {
        self.state = GameState::starting(self.config.board_radius);
        debug!(radius = self.config.board_radius, "game reset");
    }

    fn apply(&mut self, hex: Hex, animal: Animal) -> MoveResult {
        let player = self.current_player();
        match self.state.place(hex, animal) {
            Ok(outcome) => {
                log_outcome(&outcome);
                Ok(outcome)
            }
            Err(err) => {
                debug!(%player, %hex, %animal, %err, "move rejected");
                Err(err)
            }
        }
    }
}

fn log_outcome(outcome: &MoveOutcome) {
    debug!(
        player = %outcome.player,
        hex = %outcome.placed,
        animal = %outcome.animal,
        outflanked = outcome.captures.outflanked.len(),
        dominated = outcome.captures.dominated.len(),
        "piece placed"
    );
    if let Some(final_score) = outcome.final_score {
        info!(
            player_a = final_score.score.player_a,
            player_b = final_score.score.player_b,
            result = ?final_score.result,
            "game ended"
        );
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameResult, Piece};

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new(3).unwrap();
        assert_eq!(engine.current_player(), Player::PlayerA);
        assert_eq!(engine.state().board().occupied_count(), 4);
        assert_eq!(engine.score(), Score { player_a: 2, player_b: 2 });
        assert!(!engine.is_ai_turn());
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(GameEngine::new(0).unwrap_err(), ConfigError::RadiusTooSmall);
    }

    #[test]
    fn test_submit_move() {
        let mut engine = GameEngine::new(3).unwrap();
        let outcome = engine.submit_move(Hex::new(1, -2), Animal::Rabbit).unwrap();
        assert_eq!(outcome.captured, vec![Hex::new(1, -1)]);
        assert_eq!(engine.score(), Score { player_a: 4, player_b: 1 });
        assert_eq!(engine.current_player(), Player::PlayerB);
    }

    #[test]
    fn test_ai_move_is_deterministic() {
        let mut a = GameEngine::new(3).unwrap();
        let mut b = GameEngine::new(3).unwrap();
        for seed in 0..10 {
            assert_eq!(a.request_ai_move(seed), b.request_ai_move(seed));
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_vs_ai_turns() {
        let config = GameConfig::default().with_mode(GameMode::vs_ai());
        let mut engine = GameEngine::with_config(config).unwrap();

        // Human (A) may not ask the AI to play for them
        assert_eq!(engine.request_ai_move(1), Err(MoveError::NotYourTurn(Player::PlayerA)));

        engine.submit_move(Hex::new(-2, 0), Animal::Tiger).unwrap();
        assert!(engine.is_ai_turn());

        let before = engine.snapshot();
        assert_eq!(
            engine.submit_move(Hex::new(-2, 1), Animal::Tiger),
            Err(MoveError::NotYourTurn(Player::PlayerB))
        );
        assert_eq!(engine.snapshot(), before);

        let outcome = engine.request_ai_move(5).unwrap();
        assert_eq!(outcome.player, Player::PlayerB);
        assert!(!engine.is_ai_turn());
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new(2).unwrap();
        engine.submit_move(Hex::new(-1, 0), Animal::Dragon).unwrap();
        engine.reset();
        assert_eq!(engine.snapshot(), GameEngine::new(2).unwrap().snapshot());
    }

    #[test]
    fn test_ai_plays_to_the_end() {
        let mut engine = GameEngine::new(3).unwrap();
        let mut seed = 0;
        while !engine.is_ended() {
            engine.request_ai_move(seed).unwrap();
            seed += 1;
        }
        let final_score = engine.final_score().unwrap();
        assert_eq!(final_score.score.player_a + final_score.score.player_b, 37);
        assert_eq!(engine.request_ai_move(seed), Err(MoveError::GameAlreadyEnded));
        assert_eq!(engine.submit_move(Hex::ORIGIN, Animal::Tiger), Err(MoveError::GameAlreadyEnded));
    }

    #[test]
    fn test_from_snapshot_keeps_turn() {
        let pieces = [
            (Hex::new(0, 0), Piece { owner: Player::PlayerB, animal: Animal::Rabbit }),
        ];
        let state = GameState::with_pieces(1, &pieces, Player::PlayerB).unwrap();
        let engine = GameEngine::from_snapshot(&state.snapshot(), GameMode::PlayerVsPlayer).unwrap();
        assert_eq!(engine.current_player(), Player::PlayerB);
        assert_eq!(engine.state().result(), GameResult::Ongoing);
        assert_eq!(engine.legal_moves().len(), 6);
    }
}

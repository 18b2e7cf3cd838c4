//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use hexfang_core::{
    Animal, ConfigError, GameResult, GameState, Hex, MoveOutcome, Player, RandomAi, Score,
};
use serde::Serialize;

use crate::config::DEFAULT_SEED;

/// Compact record of one placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    pub player: Player,
    pub hex: Hex,
    pub animal: Animal,
    /// Number of cells flipped by this placement
    pub captured: usize,
}

impl From<&MoveOutcome> for MoveRecord {
    fn from(outcome: &MoveOutcome) -> Self {
        Self {
            player: outcome.player,
            hex: outcome.placed,
            animal: outcome.animal,
            captured: outcome.captured.len(),
        }
    }
}

/// Outcome of a single game
#[derive(Clone, Debug, Serialize)]
pub struct GameOutcome {
    /// Seed the game was played with
    pub seed: u64,
    /// Final game result
    pub result: GameResult,
    /// Final cell counts
    pub score: Score,
    /// Move history
    pub moves: Vec<MoveRecord>,
}

impl GameOutcome {
    /// Get winner (None for draw)
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }

    pub fn is_draw(&self) -> bool {
        self.result == GameResult::Draw
    }

    /// Player A's cells minus Player B's cells
    pub fn margin(&self) -> i64 {
        self.score.player_a as i64 - self.score.player_b as i64
    }
}

/// Play one random-vs-random game from the standard start
pub fn play_game(board_radius: u8, seed: u64) -> Result<GameOutcome, ConfigError> {
    let initial = GameState::new(board_radius)?;
    let mut ai = RandomAi::with_seed(seed);
    let (final_state, history) = ai.play_game(initial);

    Ok(GameOutcome {
        seed,
        result: final_state.result(),
        score: final_state.score(),
        moves: history.iter().map(MoveRecord::from).collect(),
    })
}

/// Game runner that hands out consecutive seeds
pub struct GameRunner {
    board_radius: u8,
    seed_counter: u64,
}

impl GameRunner {
    /// Create a new game runner
    pub fn new(board_radius: u8, seed: Option<u64>) -> Self {
        Self {
            board_radius,
            seed_counter: seed.unwrap_or(DEFAULT_SEED),
        }
    }

    /// Play a single game, returning the outcome
    pub fn play_game(&mut self) -> Result<GameOutcome, ConfigError> {
        let seed = self.next_seed();
        play_game(self.board_radius, seed)
    }

    /// Get next seed and increment counter
    fn next_seed(&mut self) -> u64 {
        let seed = self.seed_counter;
        self.seed_counter = self.seed_counter.wrapping_add(1);
        seed
    }

    /// Reset seed counter
    pub fn reset_seed(&mut self, seed: u64) {
        self.seed_counter = seed;
    }

    pub fn board_radius(&self) -> u8 {
        self.board_radius
    }
}

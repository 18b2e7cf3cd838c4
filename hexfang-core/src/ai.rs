//! Random move selector
//!
//! Picks uniformly among empty cells and uniformly among the three animals.
//! There is no evaluation: the same seed on the same position always yields
//! the same choice.

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::animals::{Animal, ANIMALS};
use crate::board::Hex;
use crate::game::{GameState, MoveOutcome};

/// Seeded random player
pub struct RandomAi {
    rng: ChaCha8Rng,
}

impl RandomAi {
    pub fn new() -> Self {
        Self::with_seed(42)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Choose a placement for the player to move, or `None` if the game is over
    pub fn choose_move(&mut self, state: &GameState) -> Option<(Hex, Animal)> {
        choose_move(state, &mut self.rng)
    }

    /// Play both sides until the board is full
    pub fn play_game(&mut self, initial: GameState) -> (GameState, Vec<MoveOutcome>) {
        let mut state = initial;
        let mut history = Vec::new();

        while let Some((hex, animal)) = self.choose_move(&state) {
            match state.place(hex, animal) {
                Ok(outcome) => history.push(outcome),
                Err(_) => break,
            }
        }

        (state, history)
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

/// Uniform choice over empty cells paired with a uniform animal
pub fn choose_move<R: Rng + ?Sized>(state: &GameState, rng: &mut R) -> Option<(Hex, Animal)> {
    let moves = state.legal_moves();
    let &hex = moves.choose(rng)?;
    let &animal = ANIMALS.choose(rng)?;
    Some((hex, animal))
}

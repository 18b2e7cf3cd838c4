//! Server state management
//!
//! Each game's engine sits behind its own mutex, so moves for one game are
//! applied strictly one at a time while different games proceed independently.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use hexfang_core::GameEngine;

pub type SharedGame = Arc<Mutex<GameEngine>>;

/// Server-wide shared state
pub struct ServerState {
    games: RwLock<HashMap<u64, SharedGame>>,
    next_id: AtomicU64,
}

impl ServerState {
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a new game and return its id
    pub fn insert_game(&self, engine: GameEngine) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        games.insert(id, Arc::new(Mutex::new(engine)));
        id
    }

    pub fn game(&self, id: u64) -> Option<SharedGame> {
        let games = self.games.read().unwrap_or_else(PoisonError::into_inner);
        games.get(&id).cloned()
    }

    /// Drop a game; returns false if the id was unknown
    pub fn remove_game(&self, id: u64) -> bool {
        let mut games = self.games.write().unwrap_or_else(PoisonError::into_inner);
        games.remove(&id).is_some()
    }

    pub fn game_count(&self) -> usize {
        self.games.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let state = ServerState::new();
        let first = state.insert_game(GameEngine::new(2).unwrap());
        let second = state.insert_game(GameEngine::new(3).unwrap());
        assert_ne!(first, second);
        assert_eq!(state.game_count(), 2);

        assert!(state.remove_game(first));
        assert!(!state.remove_game(first));
        assert!(state.game(first).is_none());
        assert!(state.game(second).is_some());
        assert_eq!(state.game_count(), 1);
    }
}

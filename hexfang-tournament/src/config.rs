//! Configuration types for self-play matches
//!
//! Level 4 - Utilities and configuration

use hexfang_core::config::validate_radius;
use hexfang_core::{ConfigError, DEFAULT_BOARD_RADIUS};

/// Seed used when none is given
pub const DEFAULT_SEED: u64 = 42;

/// Match configuration
#[derive(Clone, Debug)]
pub struct TournamentConfig {
    /// Number of games to play
    pub games: usize,
    /// Board radius for every game
    pub board_radius: u8,
    /// Base seed; game `i` uses `seed + i` (None = DEFAULT_SEED)
    pub seed: Option<u64>,
    /// Whether to run games in parallel
    pub parallel: bool,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            games: 100,
            board_radius: DEFAULT_BOARD_RADIUS,
            seed: None,
            parallel: true,
        }
    }
}

impl TournamentConfig {
    /// Create config for a number of games
    pub fn new(games: usize) -> Self {
        Self {
            games,
            ..Default::default()
        }
    }

    /// Set board radius
    pub fn with_radius(mut self, board_radius: u8) -> Self {
        self.board_radius = board_radius;
        self
    }

    /// Set base seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run games one after another
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Check the board radius before any game is played
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radius(self.board_radius)
    }

    pub fn base_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tournament_config_defaults() {
        let config = TournamentConfig::default();
        assert_eq!(config.games, 100);
        assert_eq!(config.board_radius, 3);
        assert_eq!(config.base_seed(), DEFAULT_SEED);
        assert!(config.parallel);
    }

    #[test]
    fn test_tournament_config_builders() {
        let config = TournamentConfig::new(8).with_radius(2).with_seed(7).sequential();
        assert_eq!(config.games, 8);
        assert_eq!(config.board_radius, 2);
        assert_eq!(config.base_seed(), 7);
        assert!(!config.parallel);
    }
}

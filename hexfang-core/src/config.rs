//! Game configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::board::{DEFAULT_BOARD_RADIUS, MAX_BOARD_RADIUS};
use crate::error::ConfigError;
use crate::game::Player;

/// Who controls each side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameMode {
    /// Both sides submit moves through `submit_move`
    #[default]
    PlayerVsPlayer,
    /// `ai_side` only moves through `request_ai_move`
    PlayerVsAi { ai_side: Player },
}

impl GameMode {
    /// Computer opponent playing Player B, as in the classic vs-AI mode
    pub fn vs_ai() -> Self {
        GameMode::PlayerVsAi { ai_side: Player::PlayerB }
    }

    pub fn ai_side(&self) -> Option<Player> {
        match self {
            GameMode::PlayerVsPlayer => None,
            GameMode::PlayerVsAi { ai_side } => Some(*ai_side),
        }
    }
}

/// Settings fixed for the lifetime of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_radius: u8,
    pub mode: GameMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_radius: DEFAULT_BOARD_RADIUS,
            mode: GameMode::PlayerVsPlayer,
        }
    }
}

impl GameConfig {
    pub fn with_radius(radius: u8) -> Self {
        Self {
            board_radius: radius,
            ..Default::default()
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_radius(self.board_radius)
    }

    /// Load and validate from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: GameConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Radius must be at least 1 (the starting cluster) and at most `MAX_BOARD_RADIUS`
pub fn validate_radius(radius: u8) -> Result<(), ConfigError> {
    if radius == 0 {
        return Err(ConfigError::RadiusTooSmall);
    }
    if radius > MAX_BOARD_RADIUS {
        return Err(ConfigError::RadiusTooLarge(radius));
    }
    Ok(())
}

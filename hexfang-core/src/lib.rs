//! Hexfang Core - Rule engine
//!
//! This crate provides the game rules for Hexfang:
//! - Board geometry (hex region with axial coordinates)
//! - Animal types and the dominance cycle
//! - Outflank and dominance capture resolution
//! - Turn order, termination and scoring
//! - Seeded random move selection

pub mod board;
pub mod animals;
pub mod capture;
pub mod game;
pub mod engine;
pub mod ai;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Hex, DIRECTIONS, DEFAULT_BOARD_RADIUS, MAX_BOARD_RADIUS};
pub use animals::{Animal, ANIMALS};
pub use capture::{resolve_captures, CaptureSet};
pub use game::{
    BoardSnapshot, CellSnapshot, FinalScore, GameEvent, GameResult, GameState, GameStatus,
    MoveOutcome, MoveResult, Piece, Player, Score,
};
pub use engine::GameEngine;
pub use ai::RandomAi;
pub use config::{GameConfig, GameMode};
pub use error::{ConfigError, MoveError};

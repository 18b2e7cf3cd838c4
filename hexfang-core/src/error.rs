//! Error types for move validation and setup

use crate::board::{Hex, MAX_BOARD_RADIUS};
use crate::game::Player;

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0} is outside the board")]
    InvalidCoordinate(Hex),

    #[error("cell {0} is already occupied")]
    CellOccupied(Hex),

    #[error("the game has already ended")]
    GameAlreadyEnded,

    #[error("it is {0}'s turn")]
    NotYourTurn(Player),
}

/// Invalid game configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board radius must be at least 1 to hold the starting pieces")]
    RadiusTooSmall,

    #[error("board radius {0} exceeds the maximum of {max}", max = MAX_BOARD_RADIUS)]
    RadiusTooLarge(u8),

    #[error("piece at {0} lies outside the board")]
    PieceOutsideBoard(Hex),

    #[error("more than one piece at {0}")]
    DuplicatePiece(Hex),

    #[error("snapshot ended flag ({claimed}) does not match the board (full: {board_full})")]
    SnapshotEndedMismatch { claimed: bool, board_full: bool },
}

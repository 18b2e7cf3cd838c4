//! Board geometry endpoint

use axum::{extract::Query, Json};
use hexfang_core::{Board, GameConfig, DEFAULT_BOARD_RADIUS, DIRECTIONS};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Deserialize)]
pub struct BoardQuery {
    pub radius: Option<u8>,
}

#[derive(Serialize)]
pub struct BoardInfo {
    pub radius: u8,
    pub cell_count: usize,
    pub hexes: Vec<[i32; 2]>,
    pub directions: Vec<[i32; 2]>,
}

/// Get board geometry for a radius (default 3)
pub async fn get_board(Query(query): Query<BoardQuery>) -> Result<Json<BoardInfo>, ApiError> {
    let radius = query.radius.unwrap_or(DEFAULT_BOARD_RADIUS);
    GameConfig::with_radius(radius).validate()?;

    let board = Board::new(radius);
    Ok(Json(BoardInfo {
        radius,
        cell_count: board.len(),
        hexes: board.coords().map(|h| [h.q, h.r]).collect(),
        directions: DIRECTIONS.iter().map(|d| [d.q, d.r]).collect(),
    }))
}

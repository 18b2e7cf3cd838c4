//! Game API routes
//!
//! Create games, submit human and AI moves, inspect and restart them.

use std::sync::{Arc, MutexGuard, PoisonError};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use hexfang_core::{
    Animal, CellSnapshot, GameConfig, GameEngine, GameEvent, GameMode, GameStatus, Hex,
    MoveOutcome, MoveResult, Player, Score, DEFAULT_BOARD_RADIUS,
};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::{ServerState, SharedGame};

/// Client view of a game
#[derive(Serialize)]
pub struct GameView {
    pub id: u64,
    pub radius: u8,
    pub mode: GameMode,
    pub current_player: Player,
    pub status: GameStatus,
    pub score: Score,
    pub is_ai_turn: bool,
    pub cells: Vec<CellSnapshot>,
}

impl GameView {
    fn new(id: u64, engine: &GameEngine) -> Self {
        let snapshot = engine.snapshot();
        Self {
            id,
            radius: snapshot.radius,
            mode: engine.config().mode,
            current_player: snapshot.current_player,
            status: engine.status(),
            score: engine.score(),
            is_ai_turn: engine.is_ai_turn(),
            cells: snapshot.cells,
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct CreateGameRequest {
    pub radius: Option<u8>,
    /// Side played by the computer; omit for player-vs-player
    pub ai_side: Option<Player>,
}

#[derive(Deserialize)]
pub struct MoveRequest {
    pub q: i32,
    pub r: i32,
    pub animal: Animal,
}

#[derive(Deserialize)]
pub struct AiMoveRequest {
    pub seed: u64,
}

#[derive(Serialize)]
pub struct MoveResponse {
    pub outcome: MoveOutcome,
    pub events: Vec<GameEvent>,
    pub game: GameView,
}

#[derive(Serialize)]
pub struct LegalMovesResponse {
    pub moves: Vec<Hex>,
}

/// Create a new game
pub async fn create_game(
    State(state): State<Arc<ServerState>>,
    body: Bytes,
) -> Result<Json<GameView>, ApiError> {
    let req = parse_create_request(&body)?;
    let mode = match req.ai_side {
        Some(ai_side) => GameMode::PlayerVsAi { ai_side },
        None => GameMode::PlayerVsPlayer,
    };
    let config = GameConfig {
        board_radius: req.radius.unwrap_or(DEFAULT_BOARD_RADIUS),
        mode,
    };

    let engine = GameEngine::with_config(config)?;
    let view_engine = engine.clone();
    let id = state.insert_game(engine);
    tracing::info!(id, radius = config.board_radius, ?mode, "game created");

    Ok(Json(GameView::new(id, &view_engine)))
}

/// Get the current state of a game
pub async fn get_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<GameView>, ApiError> {
    let game = find_game(&state, id)?;
    let engine = lock(&game);
    Ok(Json(GameView::new(id, &engine)))
}

/// List empty cells
pub async fn get_legal_moves(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<LegalMovesResponse>, ApiError> {
    let game = find_game(&state, id)?;
    let engine = lock(&game);
    Ok(Json(LegalMovesResponse {
        moves: engine.legal_moves(),
    }))
}

/// Submit a human move
pub async fn make_player_move(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    Json(req): Json<MoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let game = find_game(&state, id)?;
    let mut engine = lock(&game);
    let result = engine.submit_move(Hex::new(req.q, req.r), req.animal);
    respond(id, &engine, result)
}

/// Let the random AI move for the side to play
pub async fn make_ai_move(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
    Json(req): Json<AiMoveRequest>,
) -> Result<Json<MoveResponse>, ApiError> {
    let game = find_game(&state, id)?;
    let mut engine = lock(&game);
    let result = engine.request_ai_move(req.seed);
    respond(id, &engine, result)
}

/// Restart a game with the same settings
pub async fn reset_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<Json<GameView>, ApiError> {
    let game = find_game(&state, id)?;
    let mut engine = lock(&game);
    engine.reset();
    Ok(Json(GameView::new(id, &engine)))
}

/// Forget a game
pub async fn delete_game(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError> {
    if !state.remove_game(id) {
        return Err(ApiError::GameNotFound(id));
    }
    tracing::info!(id, "game deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// An empty body means all defaults; anything else must be valid JSON
fn parse_create_request(body: &[u8]) -> Result<CreateGameRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateGameRequest::default());
    }
    serde_json::from_slice(body).map_err(|err| ApiError::BadRequest(err.to_string()))
}

fn find_game(state: &ServerState, id: u64) -> Result<SharedGame, ApiError> {
    state.game(id).ok_or(ApiError::GameNotFound(id))
}

fn lock(game: &SharedGame) -> MutexGuard<'_, GameEngine> {
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

fn respond(id: u64, engine: &GameEngine, result: MoveResult) -> Result<Json<MoveResponse>, ApiError> {
    let outcome = result?;
    Ok(Json(MoveResponse {
        events: outcome.events(),
        outcome,
        game: GameView::new(id, engine),
    }))
}

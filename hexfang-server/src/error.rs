//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hexfang_core::{ConfigError, MoveError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no game with id {0}")]
    GameNotFound(u64),

    #[error(transparent)]
    Move(#[from] MoveError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid request body: {0}")]
    BadRequest(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::GameNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Move(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Config(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Machine-readable rejection reason
    fn reason(&self) -> &'static str {
        match self {
            ApiError::GameNotFound(_) => "game_not_found",
            ApiError::Move(MoveError::InvalidCoordinate(_)) => "invalid_coordinate",
            ApiError::Move(MoveError::CellOccupied(_)) => "cell_occupied",
            ApiError::Move(MoveError::GameAlreadyEnded) => "game_already_ended",
            ApiError::Move(MoveError::NotYourTurn(_)) => "not_your_turn",
            ApiError::Config(_) => "invalid_config",
            ApiError::BadRequest(_) => "bad_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.to_string(),
            "reason": self.reason(),
        }));
        (self.status(), body).into_response()
    }
}

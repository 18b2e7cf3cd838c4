//! HEXFANG Server - HTTP API over the game engine
//!
//! This crate provides the web backend:
//! - Board geometry for clients drawing the grid
//! - Game creation, lookup and deletion
//! - Human and AI move submission, restarts

mod error;
mod routes;
mod state;

use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub use error::ApiError;
pub use state::ServerState;

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub port: u16,
    /// Answer cross-origin requests from any origin
    pub allow_any_origin: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8002,
            allow_any_origin: true,
        }
    }
}

/// Create the router with all routes
pub fn create_router(config: &ServerConfig, state: Arc<ServerState>) -> Router {
    let router = Router::new()
        // Status endpoint
        .route("/api/status", get(routes::status::status_handler))
        // Board geometry
        .route("/api/board", get(routes::board::get_board))
        // Game API
        .route("/api/games", post(routes::games::create_game))
        .route(
            "/api/games/:id",
            get(routes::games::get_game).delete(routes::games::delete_game),
        )
        .route(
            "/api/games/:id/legal-moves",
            get(routes::games::get_legal_moves),
        )
        .route("/api/games/:id/move", post(routes::games::make_player_move))
        .route("/api/games/:id/ai-move", post(routes::games::make_ai_move))
        .route("/api/games/:id/reset", post(routes::games::reset_game))
        // Shared state
        .with_state(state);

    let router = if config.allow_any_origin {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };
    router.layer(TraceLayer::new_for_http())
}

/// Start the HTTP server
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let state = Arc::new(ServerState::new());
    let router = create_router(&config, state);

    tracing::info!("HEXFANG Server starting on http://0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

//! Example to run the HEXFANG server standalone
//!
//! Run with: cargo run -p hexfang-server --example run_server

use hexfang_server::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    println!("Starting HEXFANG server on port {}", config.port);
    println!("Create a game: curl -X POST http://localhost:{}/api/games", config.port);

    run_server(config).await
}

//! HEXFANG CLI - Command-line interface
//!
//! Commands:
//! - play: Console game, two humans or human vs random AI
//! - simulate: Random self-play statistics
//! - serve: Start the HTTP API server

mod play_cmd;
mod server;
mod simulate_cmd;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hexfang_core::GameConfig;

#[derive(Parser)]
#[command(name = "hexfang")]
#[command(about = "Hex-grid territory game with animal dominance captures")]
struct Cli {
    /// Game configuration JSON (board radius, mode)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play(play_cmd::PlayArgs),
    /// Run random self-play games and report statistics
    Simulate(simulate_cmd::SimulateArgs),
    /// Start the HTTP API server
    Serve(server::ServerArgs),
}

fn main() -> Result<()> {
    // Initialize logging; stdout belongs to the game
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, config),
        Commands::Simulate(args) => simulate_cmd::run(args, config),
        Commands::Serve(args) => server::run(args),
    }
}

/// Config file if given, defaults otherwise
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => {
            let config = GameConfig::load(path)?;
            tracing::debug!(?config, "loaded config from {}", path.display());
            Ok(config)
        }
        None => Ok(GameConfig::default()),
    }
}

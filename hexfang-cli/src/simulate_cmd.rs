//! Simulate command - random self-play statistics
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_tournament_config(), run_simulation(), report_results()
//! - Level 3: summarize()
//! - Level 4: formatting utilities

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use hexfang_core::{GameConfig, Player};
use hexfang_tournament::{play_match_with_progress, GameOutcome, MatchResult, TournamentConfig};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Board radius (defaults to the config file, then 3)
    #[arg(long)]
    pub radius: Option<u8>,

    /// Base seed; game i is played with seed + i
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play games on all cores
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Headline numbers of a simulation
#[derive(Clone, Debug, PartialEq, Serialize)]
struct Summary {
    total_games: u32,
    board_radius: u8,
    base_seed: u64,
    player_a_wins: u32,
    player_b_wins: u32,
    draws: u32,
    player_a_win_rate: f32,
    player_b_win_rate: f32,
    draw_rate: f32,
    avg_margin: f32,
    avg_captures_per_move: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// This function reads like a table of contents:
/// 1. Resolve the tournament configuration
/// 2. Play all games
/// 3. Report results
pub fn run(args: SimulateArgs, game_config: GameConfig) -> Result<()> {
    let config = build_tournament_config(&args, &game_config)?;

    tracing::info!(
        "Starting simulation: {} games, radius {}, seed {}",
        config.games,
        config.board_radius,
        config.base_seed()
    );

    let result = run_simulation(&config)?;
    let summary = summarize(&result, &config);

    report_results(&summary, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Merge command arguments over the game config
fn build_tournament_config(args: &SimulateArgs, game_config: &GameConfig) -> Result<TournamentConfig> {
    let board_radius = args.radius.unwrap_or(game_config.board_radius);
    GameConfig::with_radius(board_radius).validate()?;

    Ok(TournamentConfig {
        games: args.games,
        board_radius,
        seed: args.seed,
        parallel: args.parallel,
    })
}

/// Play every game of the simulation
fn run_simulation(config: &TournamentConfig) -> Result<MatchResult> {
    let result = play_match_with_progress(config, |outcome: &GameOutcome| {
        tracing::debug!(
            "Game seed {}: {:?} ({}-{})",
            outcome.seed,
            outcome.result,
            outcome.score.player_a,
            outcome.score.player_b
        );
    })?;
    Ok(result)
}

/// Print results
fn report_results(summary: &Summary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        print!("{}", format_text(summary));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn summarize(result: &MatchResult, config: &TournamentConfig) -> Summary {
    Summary {
        total_games: result.games_played,
        board_radius: config.board_radius,
        base_seed: config.base_seed(),
        player_a_wins: result.player_a_wins,
        player_b_wins: result.player_b_wins,
        draws: result.draws,
        player_a_win_rate: result.win_rate(Player::PlayerA),
        player_b_win_rate: result.win_rate(Player::PlayerB),
        draw_rate: result.draw_rate(),
        avg_margin: result.avg_margin,
        avg_captures_per_move: result.avg_captures_per_move,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn format_text(summary: &Summary) -> String {
    let mut out = String::new();
    out.push_str("\n=== Simulation Results ===\n");
    out.push_str(&format!("Total games:  {}\n", summary.total_games));
    out.push_str(&format!("Board radius: {}\n", summary.board_radius));
    out.push_str(&format!("Base seed:    {}\n", summary.base_seed));
    out.push_str(&format!(
        "Player A:     {} ({})\n",
        summary.player_a_wins,
        percent(summary.player_a_win_rate)
    ));
    out.push_str(&format!(
        "Player B:     {} ({})\n",
        summary.player_b_wins,
        percent(summary.player_b_win_rate)
    ));
    out.push_str(&format!(
        "Draws:        {} ({})\n",
        summary.draws,
        percent(summary.draw_rate)
    ));
    out.push_str(&format!("Avg margin:   {:+.2} (A - B)\n", summary.avg_margin));
    out.push_str(&format!(
        "Avg captures: {:.2} per move\n",
        summary.avg_captures_per_move
    ));
    out
}

fn percent(rate: f32) -> String {
    format!("{:.1}%", rate * 100.0)
}

// ============================================================================
// TESTS
// ============================================================================

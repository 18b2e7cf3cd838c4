//! Match play - many self-play games aggregated
//!
//! Level 2 - Phase-level implementation

use hexfang_core::{ConfigError, GameResult, Player};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::TournamentConfig;
use crate::game_runner::{play_game, GameOutcome};

/// Result of a match (multiple games)
#[derive(Clone, Debug, Serialize)]
pub struct MatchResult {
    pub player_a_wins: u32,
    pub player_b_wins: u32,
    pub draws: u32,
    /// Average of (Player A cells - Player B cells)
    pub avg_margin: f32,
    /// Average cells flipped per placement
    pub avg_captures_per_move: f32,
    pub games_played: u32,
    /// Individual game outcomes, in seed order
    pub game_outcomes: Vec<GameOutcome>,
}

impl MatchResult {
    /// Create empty result
    pub fn empty() -> Self {
        Self {
            player_a_wins: 0,
            player_b_wins: 0,
            draws: 0,
            avg_margin: 0.0,
            avg_captures_per_move: 0.0,
            games_played: 0,
            game_outcomes: Vec::new(),
        }
    }

    /// Win rate for a side
    pub fn win_rate(&self, player: Player) -> f32 {
        if self.games_played == 0 {
            return 0.0;
        }
        let wins = match player {
            Player::PlayerA => self.player_a_wins,
            Player::PlayerB => self.player_b_wins,
        };
        wins as f32 / self.games_played as f32
    }

    /// Get draw rate
    pub fn draw_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.draws as f32 / self.games_played as f32
        }
    }
}

/// Play a match (Level 2 phase)
pub fn play_match(config: &TournamentConfig) -> Result<MatchResult, ConfigError> {
    play_match_with_progress(config, |_| {})
}

/// Play a match, calling `on_game` after every finished game.
/// Outcomes do not depend on `config.parallel`.
pub fn play_match_with_progress<F>(
    config: &TournamentConfig,
    on_game: F,
) -> Result<MatchResult, ConfigError>
where
    F: Fn(&GameOutcome) + Sync,
{
    config.validate()?;
    if config.games == 0 {
        return Ok(MatchResult::empty());
    }

    let seeds = prepare_seeds(config);
    let run = |seed: &u64| -> Result<GameOutcome, ConfigError> {
        let outcome = play_game(config.board_radius, *seed)?;
        on_game(&outcome);
        Ok(outcome)
    };

    let outcomes: Result<Vec<GameOutcome>, ConfigError> = if config.parallel {
        seeds.par_iter().map(&run).collect()
    } else {
        seeds.iter().map(&run).collect()
    };

    let result = aggregate_results(outcomes?);
    tracing::info!(
        games = result.games_played,
        player_a_wins = result.player_a_wins,
        player_b_wins = result.player_b_wins,
        draws = result.draws,
        "match finished"
    );
    Ok(result)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// One seed per game, consecutive from the base seed
fn prepare_seeds(config: &TournamentConfig) -> Vec<u64> {
    let base_seed = config.base_seed();
    (0..config.games as u64)
        .map(|i| base_seed.wrapping_add(i))
        .collect()
}

/// Aggregate game outcomes into a match result
fn aggregate_results(outcomes: Vec<GameOutcome>) -> MatchResult {
    let mut player_a_wins = 0u32;
    let mut player_b_wins = 0u32;
    let mut draws = 0u32;
    let mut total_margin = 0i64;
    let mut total_moves = 0usize;
    let mut total_captures = 0usize;

    for outcome in &outcomes {
        total_margin += outcome.margin();
        total_moves += outcome.moves.len();
        total_captures += outcome.moves.iter().map(|m| m.captured).sum::<usize>();

        match outcome.result {
            GameResult::PlayerAWins => player_a_wins += 1,
            GameResult::PlayerBWins => player_b_wins += 1,
            GameResult::Draw => draws += 1,
            // Unreachable on a validated radius: every game fills its board
            GameResult::Ongoing => {}
        }
    }

    let games_played = outcomes.len() as u32;
    let avg_margin = if games_played > 0 {
        total_margin as f32 / games_played as f32
    } else {
        0.0
    };
    let avg_captures_per_move = if total_moves > 0 {
        total_captures as f32 / total_moves as f32
    } else {
        0.0
    };

    MatchResult {
        player_a_wins,
        player_b_wins,
        draws,
        avg_margin,
        avg_captures_per_move,
        games_played,
        game_outcomes: outcomes,
    }
}

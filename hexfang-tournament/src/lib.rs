//! Hexfang Tournament - Self-play statistics
//!
//! This crate plays the random selector against itself to measure how the
//! rules treat each side:
//! - Single games from a seed
//! - Matches of many games, sequential or parallel
//! - Aggregated win rates and score margins
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: play_match (phases)
//! - Level 3: play_game (steps)
//! - Level 4: configuration

mod config;
mod game_runner;
mod match_play;

pub use config::TournamentConfig;
pub use game_runner::{play_game, GameOutcome, GameRunner, MoveRecord};
pub use match_play::{play_match, play_match_with_progress, MatchResult};

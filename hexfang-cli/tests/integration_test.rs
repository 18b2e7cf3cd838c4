//! Integration tests for Hexfang
//!
//! Tests the full stack: board, capture rules, engine, random AI and self-play

use hexfang_core::{
    Animal, Board, GameConfig, GameEngine, GameEvent, GameMode, GameResult, GameState,
    GameStatus, Hex, MoveError, Piece, Player, RandomAi, Score,
};
use hexfang_tournament::{play_game, play_match, TournamentConfig};

// ============================================================================
// TEST FIXTURES
// ============================================================================

const A: Player = Player::PlayerA;
const B: Player = Player::PlayerB;

fn piece(owner: Player, animal: Animal) -> Piece {
    Piece { owner, animal }
}

fn owner_at(state: &GameState, hex: Hex) -> Option<Player> {
    state.board().cell_at(hex).and_then(|c| c.owner())
}

/// Radius 3 board with every cell but (3, 0) filled, all tigers, 18 cells each.
/// The three neighbours of (3, 0) belong to Player A.
fn nearly_full_board() -> GameState {
    let last = Hex::new(3, 0);
    let forced_a: Vec<Hex> = last.neighbors().into_iter().filter(|h| h.is_within(3)).collect();
    assert_eq!(forced_a.len(), 3);

    let mut pieces: Vec<(Hex, Piece)> = forced_a
        .iter()
        .map(|&h| (h, piece(A, Animal::Tiger)))
        .collect();
    let rest: Vec<Hex> = Board::new(3)
        .coords()
        .filter(|h| *h != last && !forced_a.contains(h))
        .collect();
    for (i, hex) in rest.into_iter().enumerate() {
        let owner = if i < 15 { A } else { B };
        pieces.push((hex, piece(owner, Animal::Tiger)));
    }

    GameState::with_pieces(3, &pieces, A).unwrap()
}

// ============================================================================
// RULE SCENARIOS
// ============================================================================

#[test]
fn test_standard_start() {
    let engine = GameEngine::new(3).unwrap();
    let board = engine.state().board();

    assert_eq!(board.len(), 37);
    assert_eq!(board.occupied_count(), 4);
    assert_eq!(board.cell_at(Hex::new(0, 0)).unwrap().piece(), Some(piece(A, Animal::Tiger)));
    assert_eq!(board.cell_at(Hex::new(1, 0)).unwrap().piece(), Some(piece(B, Animal::Tiger)));
    assert_eq!(board.cell_at(Hex::new(0, -1)).unwrap().piece(), Some(piece(A, Animal::Rabbit)));
    assert_eq!(board.cell_at(Hex::new(1, -1)).unwrap().piece(), Some(piece(B, Animal::Dragon)));
    assert_eq!(engine.status(), GameStatus::AwaitingPlacement(A));
}

#[test]
fn test_rabbit_dominates_dragon() {
    let mut engine = GameEngine::new(3).unwrap();
    let outcome = engine.submit_move(Hex::new(1, -2), Animal::Rabbit).unwrap();

    assert!(outcome.captures.outflanked.is_empty());
    assert_eq!(outcome.captures.dominated, vec![Hex::new(1, -1)]);
    assert_eq!(
        engine.state().board().cell_at(Hex::new(1, -1)).unwrap().piece(),
        Some(piece(A, Animal::Dragon))
    );
}

#[test]
fn test_outflank_run_of_two() {
    let pieces = [
        (Hex::new(-1, 0), piece(B, Animal::Tiger)),
        (Hex::new(0, 0), piece(B, Animal::Tiger)),
        (Hex::new(1, 0), piece(A, Animal::Tiger)),
    ];
    let mut state = GameState::with_pieces(3, &pieces, A).unwrap();
    let outcome = state.place(Hex::new(-2, 0), Animal::Tiger).unwrap();

    assert_eq!(outcome.captured, vec![Hex::new(-1, 0), Hex::new(0, 0)]);
    assert!(outcome.captures.dominated.is_empty());
    assert_eq!(state.score(), Score { player_a: 4, player_b: 0 });
}

#[test]
fn test_last_placement_ends_game() {
    let mut state = nearly_full_board();
    assert_eq!(state.score(), Score { player_a: 18, player_b: 18 });

    let outcome = state.place(Hex::new(3, 0), Animal::Tiger).unwrap();
    assert!(outcome.captured.is_empty());

    let final_score = outcome.final_score.unwrap();
    assert_eq!(final_score.score, Score { player_a: 19, player_b: 18 });
    assert_eq!(final_score.winner(), Some(A));
    assert_eq!(state.status(), GameStatus::Ended(final_score));
    assert_eq!(outcome.events().last(), Some(&GameEvent::GameEnded(final_score)));

    assert_eq!(
        state.place(Hex::new(3, 0), Animal::Tiger),
        Err(MoveError::GameAlreadyEnded)
    );
}

#[test]
fn test_captured_cells_keep_animal() {
    // Dragon for A outflanks a B rabbit; the rabbit stays a rabbit
    let pieces = [
        (Hex::new(0, 0), piece(B, Animal::Rabbit)),
        (Hex::new(1, 0), piece(A, Animal::Dragon)),
    ];
    let mut state = GameState::with_pieces(2, &pieces, A).unwrap();
    state.place(Hex::new(-1, 0), Animal::Dragon).unwrap();

    assert_eq!(owner_at(&state, Hex::new(0, 0)), Some(A));
    assert_eq!(
        state.board().cell_at(Hex::new(0, 0)).unwrap().animal(),
        Some(Animal::Rabbit)
    );
}

// ============================================================================
// ENGINE AND AI
// ============================================================================

#[test]
fn test_human_vs_ai_full_game() {
    let config = GameConfig::with_radius(2).with_mode(GameMode::vs_ai());
    let mut engine = GameEngine::with_config(config).unwrap();
    let mut human = RandomAi::with_seed(8);
    let mut seed = 100;

    while !engine.is_ended() {
        if engine.is_ai_turn() {
            let outcome = engine.request_ai_move(seed).unwrap();
            assert_eq!(outcome.player, B);
            seed += 1;
        } else {
            let (hex, animal) = human.choose_move(engine.state()).unwrap();
            let outcome = engine.submit_move(hex, animal).unwrap();
            assert_eq!(outcome.player, A);
        }
    }

    let final_score = engine.final_score().unwrap();
    assert_eq!(final_score.score.player_a + final_score.score.player_b, 19);
    assert!(engine.legal_moves().is_empty());
}

#[test]
fn test_snapshot_resume() {
    let mut engine = GameEngine::new(3).unwrap();
    for seed in 0..6 {
        engine.request_ai_move(seed).unwrap();
    }

    let json = serde_json::to_string(&engine.snapshot()).unwrap();
    let snapshot = serde_json::from_str(&json).unwrap();
    let mut resumed = GameEngine::from_snapshot(&snapshot, GameMode::PlayerVsPlayer).unwrap();

    assert_eq!(
        engine.request_ai_move(77).unwrap(),
        resumed.request_ai_move(77).unwrap()
    );
    assert_eq!(engine.snapshot(), resumed.snapshot());
}

// ============================================================================
// SELF-PLAY
// ============================================================================

#[test]
fn test_self_play_is_reproducible() {
    let a = play_game(3, 2024).unwrap();
    let b = play_game(3, 2024).unwrap();
    assert_eq!(a.moves, b.moves);
    assert_eq!(a.score.player_a + a.score.player_b, 37);
}

#[test]
fn test_match_statistics() {
    let config = TournamentConfig::new(20).with_radius(2).with_seed(1);
    let result = play_match(&config).unwrap();

    assert_eq!(result.games_played, 20);
    assert_eq!(result.player_a_wins + result.player_b_wins + result.draws, 20);
    for outcome in &result.game_outcomes {
        assert_ne!(outcome.result, GameResult::Ongoing);
        assert_eq!(outcome.moves.len(), 15);
    }
}

#[test]
fn test_self_play_rejects_empty_board() {
    assert!(play_game(0, 1).is_err());
    assert!(play_match(&TournamentConfig::new(3).with_radius(0)).is_err());
}

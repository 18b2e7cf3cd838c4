//! Game state, placement and termination

use serde::{Deserialize, Serialize};

use crate::animals::Animal;
use crate::board::{Board, Hex};
use crate::capture::{resolve_captures, CaptureSet};
use crate::config::validate_radius;
use crate::error::{ConfigError, MoveError};

// ============================================================================
// CORE TYPES
// ============================================================================

/// Player side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    PlayerA = 0,
    PlayerB = 1,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::PlayerA => f.write_str("Player A"),
            Player::PlayerB => f.write_str("Player B"),
        }
    }
}

/// A piece on the board. Capturing changes `owner`, never `animal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub animal: Animal,
}

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    PlayerAWins,
    PlayerBWins,
    Draw,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::PlayerAWins => Some(Player::PlayerA),
            GameResult::PlayerBWins => Some(Player::PlayerB),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

/// Cells owned by each side
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub player_a: usize,
    pub player_b: usize,
}

impl Score {
    pub fn of(board: &Board) -> Self {
        Self {
            player_a: board.count_by_owner(Player::PlayerA),
            player_b: board.count_by_owner(Player::PlayerB),
        }
    }

    pub fn for_player(&self, player: Player) -> usize {
        match player {
            Player::PlayerA => self.player_a,
            Player::PlayerB => self.player_b,
        }
    }

    /// Higher count wins, equal counts draw
    pub fn result(&self) -> GameResult {
        use std::cmp::Ordering;
        match self.player_a.cmp(&self.player_b) {
            Ordering::Greater => GameResult::PlayerAWins,
            Ordering::Less => GameResult::PlayerBWins,
            Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Score frozen at the moment the board filled up
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalScore {
    pub score: Score,
    pub result: GameResult,
}

impl FinalScore {
    pub fn from_score(score: Score) -> Self {
        Self { score, result: score.result() }
    }

    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }
}

/// Where the game stands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    AwaitingPlacement(Player),
    Ended(FinalScore),
}

/// Starting cluster at the board center:
/// A-Rabbit (0,-1)  B-Dragon (1,-1)
/// A-Tiger  (0, 0)  B-Tiger  (1, 0)
pub const STARTING_PIECES: [(Hex, Piece); 4] = [
    (Hex::new(0, 0), Piece { owner: Player::PlayerA, animal: Animal::Tiger }),
    (Hex::new(1, 0), Piece { owner: Player::PlayerB, animal: Animal::Tiger }),
    (Hex::new(0, -1), Piece { owner: Player::PlayerA, animal: Animal::Rabbit }),
    (Hex::new(1, -1), Piece { owner: Player::PlayerB, animal: Animal::Dragon }),
];

// ============================================================================
// MOVE OUTCOME
// ============================================================================

/// Everything that happened as the result of one accepted placement
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    pub placed: Hex,
    pub player: Player,
    pub animal: Animal,
    /// Captures split by rule
    pub captures: CaptureSet,
    /// Union of all captured cells, each once
    pub captured: Vec<Hex>,
    /// Player to move next
    pub next_player: Player,
    /// Set when this move filled the board
    pub final_score: Option<FinalScore>,
}

impl MoveOutcome {
    pub fn game_ended(&self) -> bool {
        self.final_score.is_some()
    }

    /// Expand into the ordered event stream collaborators react to
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = vec![GameEvent::PiecePlaced {
            hex: self.placed,
            player: self.player,
            animal: self.animal,
        }];
        if !self.captured.is_empty() {
            events.push(GameEvent::TilesCaptured {
                by: self.player,
                cells: self.captured.clone(),
            });
        }
        events.push(GameEvent::TurnChanged { player: self.next_player });
        if let Some(final_score) = self.final_score {
            events.push(GameEvent::GameEnded(final_score));
        }
        events
    }
}

/// State change notifications for presentation layers
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PiecePlaced { hex: Hex, player: Player, animal: Animal },
    TilesCaptured { by: Player, cells: Vec<Hex> },
    TurnChanged { player: Player },
    GameEnded(FinalScore),
}

/// Result of submitting a move
pub type MoveResult = Result<MoveOutcome, MoveError>;

// ============================================================================
// GAME STATE
// ============================================================================

/// Board plus turn state. Owns every cell of the game.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    current_player: Player,
    final_score: Option<FinalScore>,
}

impl GameState {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// New game with the starting cluster and Player A to move.
    /// The radius must be at least 1 for all four starting pieces to fit.
    pub fn new(radius: u8) -> Result<Self, ConfigError> {
        validate_radius(radius)?;
        Ok(Self::starting(radius))
    }

    /// Starting position on a radius already checked by `validate_radius`
    pub(crate) fn starting(radius: u8) -> Self {
        let mut board = Board::new(radius);
        for (hex, piece) in STARTING_PIECES {
            board.place(hex, piece.owner, piece.animal);
        }
        Self {
            board,
            current_player: Player::PlayerA,
            final_score: None,
        }
    }

    /// Build an arbitrary position. A full board starts out ended.
    pub fn with_pieces(
        radius: u8,
        pieces: &[(Hex, Piece)],
        current_player: Player,
    ) -> Result<Self, ConfigError> {
        validate_radius(radius)?;
        let mut board = Board::new(radius);
        for &(hex, piece) in pieces {
            if !board.contains(hex) {
                return Err(ConfigError::PieceOutsideBoard(hex));
            }
            if !board.is_empty(hex) {
                return Err(ConfigError::DuplicatePiece(hex));
            }
            board.place(hex, piece.owner, piece.animal);
        }

        let mut state = Self {
            board,
            current_player,
            final_score: None,
        };
        state.check_game_end();
        Ok(state)
    }

    /// Rebuild a game from a snapshot
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, ConfigError> {
        let pieces: Vec<(Hex, Piece)> = snapshot
            .cells
            .iter()
            .map(|c| (c.hex, Piece { owner: c.owner, animal: c.animal }))
            .collect();
        let state = Self::with_pieces(snapshot.radius, &pieces, snapshot.current_player)?;
        if state.is_ended() != snapshot.ended {
            return Err(ConfigError::SnapshotEndedMismatch {
                claimed: snapshot.ended,
                board_full: state.is_ended(),
            });
        }
        Ok(state)
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn is_ended(&self) -> bool {
        self.final_score.is_some()
    }

    pub fn final_score(&self) -> Option<FinalScore> {
        self.final_score
    }

    pub fn status(&self) -> GameStatus {
        match self.final_score {
            Some(final_score) => GameStatus::Ended(final_score),
            None => GameStatus::AwaitingPlacement(self.current_player),
        }
    }

    pub fn result(&self) -> GameResult {
        self.final_score.map_or(GameResult::Ongoing, |f| f.result)
    }

    /// Live score over the whole board
    pub fn score(&self) -> Score {
        Score::of(&self.board)
    }

    /// All empty cells, recomputed on every call
    pub fn legal_moves(&self) -> Vec<Hex> {
        if self.is_ended() {
            return vec![];
        }
        self.board.empty_cells().collect()
    }

    // ========================================================================
    // APPLY MOVE
    // ========================================================================

    /// Check a placement without applying it
    pub fn validate(&self, hex: Hex) -> Result<(), MoveError> {
        if self.is_ended() {
            return Err(MoveError::GameAlreadyEnded);
        }
        match self.board.cell_at(hex) {
            None => Err(MoveError::InvalidCoordinate(hex)),
            Some(cell) if !cell.is_empty() => Err(MoveError::CellOccupied(hex)),
            Some(_) => Ok(()),
        }
    }

    /// Place `animal` for the current player at `hex`, resolve captures,
    /// pass the turn and check for a full board.
    pub fn place(&mut self, hex: Hex, animal: Animal) -> MoveResult {
        self.validate(hex)?;

        let player = self.current_player;
        self.board.place(hex, player, animal);

        let captures = resolve_captures(&self.board, hex, player, animal);
        let captured = captures.all();
        for &cell in &captured {
            self.board.set_owner(cell, player);
        }

        self.current_player = player.opponent();
        self.check_game_end();

        Ok(MoveOutcome {
            placed: hex,
            player,
            animal,
            captures,
            captured,
            next_player: self.current_player,
            final_score: self.final_score,
        })
    }

    fn check_game_end(&mut self) {
        if self.final_score.is_none() && self.board.empty_count() == 0 {
            self.final_score = Some(FinalScore::from_score(self.score()));
        }
    }

    // ========================================================================
    // SNAPSHOT
    // ========================================================================

    /// Serializable description of the full game state
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            radius: self.board.radius(),
            current_player: self.current_player,
            ended: self.is_ended(),
            cells: self
                .board
                .pieces()
                .map(|(hex, piece)| CellSnapshot {
                    hex,
                    owner: piece.owner,
                    animal: piece.animal,
                })
                .collect(),
        }
    }
}

/// One occupied cell in a snapshot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub hex: Hex,
    pub owner: Player,
    pub animal: Animal,
}

/// Board and turn state; empty cells are implied by the radius
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub radius: u8,
    pub current_player: Player,
    pub ended: bool,
    pub cells: Vec<CellSnapshot>,
}

// ============================================================================
// TESTS
// ============================================================================

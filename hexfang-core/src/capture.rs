//! Capture resolution for a freshly placed piece
//!
//! Two independent rules run against the board as it stands right after
//! the placement and before any flip from that placement:
//! - outflank: opponent runs bracketed by the placing player along a ray
//! - dominance: adjacent opponent pieces of the placing animal's prey
//!
//! Nothing cascades: captured cells do not trigger further captures.

use serde::{Deserialize, Serialize};

use crate::animals::Animal;
use crate::board::{Board, Cell, Hex, DIRECTIONS};
use crate::game::Player;

/// Cells captured by one placement, split by rule
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureSet {
    pub outflanked: Vec<Hex>,
    pub dominated: Vec<Hex>,
}

impl CaptureSet {
    /// Union of both rules, each cell once: outflank captures in direction
    /// order, then dominance captures not already present.
    pub fn all(&self) -> Vec<Hex> {
        let mut all = self.outflanked.clone();
        for &hex in &self.dominated {
            if !all.contains(&hex) {
                all.push(hex);
            }
        }
        all
    }

    pub fn is_empty(&self) -> bool {
        self.outflanked.is_empty() && self.dominated.is_empty()
    }
}

/// Resolve both capture rules for a piece `animal` just placed by `player` at `placed`.
pub fn resolve_captures(board: &Board, placed: Hex, player: Player, animal: Animal) -> CaptureSet {
    CaptureSet {
        outflanked: outflank_captures(board, placed, player),
        dominated: dominance_captures(board, placed, player, animal),
    }
}

/// Outflank rule over all six rays from `placed`
pub fn outflank_captures(board: &Board, placed: Hex, player: Player) -> Vec<Hex> {
    let mut captured = Vec::new();
    for dir in DIRECTIONS {
        captured.extend(scan_ray(board, placed, dir, player));
    }
    captured
}

/// Walk one ray; the opponent run is captured only if a `player` piece closes it.
fn scan_ray(board: &Board, placed: Hex, dir: Hex, player: Player) -> Vec<Hex> {
    let mut line = Vec::new();
    let mut current = placed + dir;

    loop {
        match board.cell_at(current) {
            // Off the board or an empty cell: nothing bracketed
            None | Some(Cell::Empty) => return Vec::new(),
            Some(Cell::Occupied(piece)) if piece.owner == player => return line,
            Some(Cell::Occupied(_)) => {
                line.push(current);
                current = current + dir;
            }
        }
    }
}

/// Dominance rule over the six immediate neighbors of `placed`
pub fn dominance_captures(board: &Board, placed: Hex, player: Player, animal: Animal) -> Vec<Hex> {
    placed
        .neighbors()
        .into_iter()
        .filter(|&hex| match board.cell_at(hex) {
            Some(Cell::Occupied(piece)) => piece.owner != player && animal.dominates(piece.animal),
            _ => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Player = Player::PlayerA;
    const B: Player = Player::PlayerB;

    fn board_with(pieces: &[(i32, i32, Player, Animal)]) -> Board {
        let mut board = Board::new(3);
        for &(q, r, owner, animal) in pieces {
            board.place(Hex::new(q, r), owner, animal);
        }
        board
    }

    #[test]
    fn test_outflank_two_in_a_row() {
        // A places at (-2,0); B B at (-1,0),(0,0); A closes at (1,0)
        let board = board_with(&[
            (-2, 0, A, Animal::Tiger),
            (-1, 0, B, Animal::Tiger),
            (0, 0, B, Animal::Tiger),
            (1, 0, A, Animal::Tiger),
        ]);
        let captured = outflank_captures(&board, Hex::new(-2, 0), A);
        assert_eq!(captured, vec![Hex::new(-1, 0), Hex::new(0, 0)]);
    }

    #[test]
    fn test_outflank_ends_in_empty() {
        let board = board_with(&[
            (-2, 0, A, Animal::Tiger),
            (-1, 0, B, Animal::Tiger),
            (0, 0, B, Animal::Tiger),
        ]);
        assert!(outflank_captures(&board, Hex::new(-2, 0), A).is_empty());
    }

    #[test]
    fn test_outflank_runs_off_board() {
        let board = board_with(&[
            (0, 0, A, Animal::Tiger),
            (1, 0, B, Animal::Tiger),
            (2, 0, B, Animal::Tiger),
            (3, 0, B, Animal::Tiger),
        ]);
        assert!(outflank_captures(&board, Hex::new(0, 0), A).is_empty());
    }

    #[test]
    fn test_outflank_adjacent_own_piece_captures_nothing() {
        let board = board_with(&[(0, 0, A, Animal::Tiger), (1, 0, A, Animal::Rabbit)]);
        assert!(outflank_captures(&board, Hex::new(0, 0), A).is_empty());
    }

    #[test]
    fn test_outflank_multiple_directions() {
        let board = board_with(&[
            (0, 0, A, Animal::Tiger),
            (1, 0, B, Animal::Tiger),
            (2, 0, A, Animal::Tiger),
            (0, 1, B, Animal::Tiger),
            (0, 2, A, Animal::Tiger),
            (-1, 0, B, Animal::Tiger),
        ]);
        let mut captured = outflank_captures(&board, Hex::new(0, 0), A);
        captured.sort();
        assert_eq!(captured, vec![Hex::new(0, 1), Hex::new(1, 0)]);
    }

    #[test]
    fn test_dominance_captures_prey_only() {
        let board = board_with(&[
            (0, 0, A, Animal::Rabbit),
            (1, 0, B, Animal::Dragon),
            (0, 1, B, Animal::Tiger),
            (-1, 0, B, Animal::Rabbit),
            (0, -1, A, Animal::Dragon),
        ]);
        let captured = dominance_captures(&board, Hex::new(0, 0), A, Animal::Rabbit);
        assert_eq!(captured, vec![Hex::new(1, 0)]);
    }

    #[test]
    fn test_dominance_ignores_distant_prey() {
        let board = board_with(&[(0, 0, A, Animal::Tiger), (2, 0, B, Animal::Rabbit)]);
        assert!(dominance_captures(&board, Hex::new(0, 0), A, Animal::Tiger).is_empty());
    }

    #[test]
    fn test_union_counts_double_capture_once() {
        // (1,0) is both outflanked and dominated
        let board = board_with(&[
            (0, 0, A, Animal::Tiger),
            (1, 0, B, Animal::Rabbit),
            (2, 0, A, Animal::Dragon),
        ]);
        let set = resolve_captures(&board, Hex::new(0, 0), A, Animal::Tiger);
        assert_eq!(set.outflanked, vec![Hex::new(1, 0)]);
        assert_eq!(set.dominated, vec![Hex::new(1, 0)]);
        assert_eq!(set.all(), vec![Hex::new(1, 0)]);
    }

    #[test]
    fn test_uses_pre_capture_state() {
        // Dominance would capture (1,-1) only; outflank flips (1,0) but that flip
        // must not change what dominance sees.
        let board = board_with(&[
            (0, 0, A, Animal::Dragon),
            (1, 0, B, Animal::Rabbit),
            (2, 0, A, Animal::Tiger),
            (1, -1, B, Animal::Tiger),
        ]);
        let set = resolve_captures(&board, Hex::new(0, 0), A, Animal::Dragon);
        assert_eq!(set.outflanked, vec![Hex::new(1, 0)]);
        assert_eq!(set.dominated, vec![Hex::new(1, -1)]);
        assert_eq!(set.all().len(), 2);
    }
}

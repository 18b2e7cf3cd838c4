//! Hex board geometry with axial coordinates

use std::ops::Add;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::animals::Animal;
use crate::game::{Piece, Player};

/// Default board radius (37 cells, the "7x7" board)
pub const DEFAULT_BOARD_RADIUS: u8 = 3;

/// Largest radius a board can be configured with
pub const MAX_BOARD_RADIUS: u8 = 32;

/// Axial hex coordinates. The cube coordinate `s = -q - r` is derived, never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hex {
    pub q: i32,
    pub r: i32,
}

impl Hex {
    pub const ORIGIN: Hex = Hex::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// Derived cube coordinate
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Distance from center (0,0)
    pub fn distance_to_center(&self) -> i32 {
        (self.q.abs() + self.r.abs() + self.s().abs()) / 2
    }

    /// Check if this hex lies in the hexagon of the given radius
    pub fn is_within(&self, radius: u8) -> bool {
        self.distance_to_center() <= i32::from(radius)
    }

    /// Get neighbor in direction (0-5)
    pub fn neighbor(&self, direction: usize) -> Hex {
        *self + DIRECTIONS[direction % 6]
    }

    /// All six neighbors, in `DIRECTIONS` order
    pub fn neighbors(&self) -> [Hex; 6] {
        DIRECTIONS.map(|dir| *self + dir)
    }
}

impl Add for Hex {
    type Output = Hex;

    fn add(self, other: Hex) -> Hex {
        Hex::new(self.q + other.q, self.r + other.r)
    }
}

impl std::fmt::Display for Hex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

/// Unit offsets to the six neighbors; also the outflank scan rays.
/// Index: 0=E, 1=NE, 2=NW, 3=W, 4=SW, 5=SE
pub const DIRECTIONS: [Hex; 6] = [
    Hex::new(1, 0),
    Hex::new(1, -1),
    Hex::new(0, -1),
    Hex::new(-1, 0),
    Hex::new(-1, 1),
    Hex::new(0, 1),
];

/// The six scan directions
pub fn directions() -> &'static [Hex; 6] {
    &DIRECTIONS
}

/// Number of cells in a hexagon of radius `r`: 3r^2 + 3r + 1
pub const fn cell_count(radius: u8) -> usize {
    let r = radius as usize;
    3 * r * r + 3 * r + 1
}

// ============================================================================
// CELLS
// ============================================================================

/// State of one board position. An occupied cell always has both an owner
/// and an animal; once occupied it is never emptied again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece.owner),
        }
    }

    pub fn animal(&self) -> Option<Animal> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece.animal),
        }
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(*piece),
        }
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// Fixed hexagonal region mapping every coordinate to exactly one cell.
///
/// Cells are kept in generation order (q ascending, then r ascending) so
/// that iteration is deterministic.
#[derive(Clone, Debug)]
pub struct Board {
    radius: u8,
    coords: Vec<Hex>,
    cells: Vec<Cell>,
    index: FxHashMap<Hex, usize>,
}

impl Board {
    /// Create an empty board of the given radius
    pub fn new(radius: u8) -> Self {
        let n = cell_count(radius);
        let mut coords = Vec::with_capacity(n);
        let mut index = FxHashMap::default();
        index.reserve(n);

        let radius_i = i32::from(radius);
        for q in -radius_i..=radius_i {
            let r1 = (-radius_i).max(-q - radius_i);
            let r2 = radius_i.min(-q + radius_i);
            for r in r1..=r2 {
                let hex = Hex::new(q, r);
                index.insert(hex, coords.len());
                coords.push(hex);
            }
        }

        Self {
            radius,
            cells: vec![Cell::Empty; coords.len()],
            coords,
            index,
        }
    }

    pub fn radius(&self) -> u8 {
        self.radius
    }

    /// Total number of cells in the region
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if a coordinate belongs to the region
    pub fn contains(&self, hex: Hex) -> bool {
        self.index.contains_key(&hex)
    }

    /// Cell at `hex`, or `None` when the coordinate is outside the region.
    /// Scans rely on `None` to stop at the board edge.
    pub fn cell_at(&self, hex: Hex) -> Option<Cell> {
        self.index.get(&hex).map(|&i| self.cells[i])
    }

    /// True iff the cell exists and has no owner
    pub fn is_empty(&self, hex: Hex) -> bool {
        matches!(self.cell_at(hex), Some(Cell::Empty))
    }

    /// Occupy an empty cell. Callers check emptiness first.
    pub fn place(&mut self, hex: Hex, player: Player, animal: Animal) {
        debug_assert!(self.contains(hex), "place outside the board at {hex}");
        if let Some(&i) = self.index.get(&hex) {
            debug_assert!(self.cells[i].is_empty(), "place on occupied cell {hex}");
            self.cells[i] = Cell::Occupied(Piece { owner: player, animal });
        }
    }

    /// Change the controller of an occupied cell, keeping its animal.
    /// Empty or out-of-region coordinates are left alone.
    pub fn set_owner(&mut self, hex: Hex, player: Player) {
        if let Some(&i) = self.index.get(&hex) {
            if let Cell::Occupied(piece) = &mut self.cells[i] {
                piece.owner = player;
            }
        }
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_empty()).count()
    }

    pub fn count_by_owner(&self, player: Player) -> usize {
        self.cells.iter().filter(|c| c.owner() == Some(player)).count()
    }

    /// Iterate all cells in generation order
    pub fn iter(&self) -> impl Iterator<Item = (Hex, Cell)> + '_ {
        self.coords.iter().copied().zip(self.cells.iter().copied())
    }

    /// Iterate all coordinates of the region
    pub fn coords(&self) -> impl Iterator<Item = Hex> + '_ {
        self.coords.iter().copied()
    }

    /// Iterate empty coordinates in generation order
    pub fn empty_cells(&self) -> impl Iterator<Item = Hex> + '_ {
        self.iter().filter(|(_, c)| c.is_empty()).map(|(hex, _)| hex)
    }

    /// Iterate occupied coordinates with their pieces
    pub fn pieces(&self) -> impl Iterator<Item = (Hex, Piece)> + '_ {
        self.iter().filter_map(|(hex, c)| c.piece().map(|p| (hex, p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_add_and_s() {
        let h = Hex::new(2, -1) + Hex::new(-1, 3);
        assert_eq!(h, Hex::new(1, 2));
        assert_eq!(h.s(), -3);
    }

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = Hex::new(1, -2);
        let neighbors = center.neighbors();
        assert_eq!(neighbors.len(), 6);
        for (i, n) in neighbors.iter().enumerate() {
            assert_eq!(*n, center.neighbor(i));
            assert_eq!((n.q - center.q).abs() + (n.r - center.r).abs() + (n.s() - center.s()).abs(), 2);
        }
    }

    #[test]
    fn test_directions_match_neighbor_offsets() {
        let offsets: Vec<_> = Hex::ORIGIN.neighbors().to_vec();
        assert_eq!(offsets, directions().to_vec());
    }

    #[test]
    fn test_hex_within() {
        assert!(Hex::new(0, 0).is_within(3));
        assert!(Hex::new(3, 0).is_within(3));
        assert!(Hex::new(3, -3).is_within(3));
        assert!(!Hex::new(4, 0).is_within(3));
        assert!(!Hex::new(2, 2).is_within(3)); // s = -4
    }

    #[test]
    fn test_board_cell_count() {
        for radius in 0..=5u8 {
            let board = Board::new(radius);
            assert_eq!(board.len(), cell_count(radius));
            assert_eq!(board.empty_count(), board.len());
        }
        assert_eq!(Board::new(3).len(), 37);
    }

    #[test]
    fn test_cell_at_outside_region() {
        let board = Board::new(2);
        assert_eq!(board.cell_at(Hex::new(0, 0)), Some(Cell::Empty));
        assert_eq!(board.cell_at(Hex::new(3, 0)), None);
        assert!(!board.is_empty(Hex::new(3, 0)));
    }

    #[test]
    fn test_place_and_set_owner_keeps_animal() {
        let mut board = Board::new(2);
        let hex = Hex::new(1, 0);
        board.place(hex, Player::PlayerA, Animal::Dragon);
        assert!(!board.is_empty(hex));

        board.set_owner(hex, Player::PlayerB);
        let cell = board.cell_at(hex).unwrap();
        assert_eq!(cell.owner(), Some(Player::PlayerB));
        assert_eq!(cell.animal(), Some(Animal::Dragon));
    }

    #[test]
    fn test_set_owner_on_empty_is_noop() {
        let mut board = Board::new(1);
        board.set_owner(Hex::ORIGIN, Player::PlayerA);
        assert!(board.is_empty(Hex::ORIGIN));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_counts() {
        let mut board = Board::new(1);
        board.place(Hex::new(0, 0), Player::PlayerA, Animal::Tiger);
        board.place(Hex::new(1, 0), Player::PlayerB, Animal::Rabbit);
        board.place(Hex::new(0, 1), Player::PlayerB, Animal::Rabbit);
        assert_eq!(board.occupied_count(), 3);
        assert_eq!(board.empty_count(), 4);
        assert_eq!(board.count_by_owner(Player::PlayerA), 1);
        assert_eq!(board.count_by_owner(Player::PlayerB), 2);
        assert_eq!(board.occupied_count() + board.empty_count(), board.len());
    }

    #[test]
    fn test_iteration_order_is_stable() {
        let a: Vec<_> = Board::new(3).coords().collect();
        let b: Vec<_> = Board::new(3).coords().collect();
        assert_eq!(a, b);
        assert_eq!(a.first(), Some(&Hex::new(-3, 0)));
        assert_eq!(a.last(), Some(&Hex::new(3, 0)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "place outside the board")]
    fn test_place_outside_region_panics_in_debug() {
        let mut board = Board::new(1);
        board.place(Hex::new(2, 0), Player::PlayerA, Animal::Tiger);
    }
}

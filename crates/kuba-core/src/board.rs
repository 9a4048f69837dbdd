//! Board representation.
//!
//! The board is pure storage: a 7x7 grid where each cell is empty or holds
//! the id of a marble. It knows nothing about the rules; the game keeps each
//! marble's recorded position in agreement with the cell that holds it.

use crate::coord::{Coord, BOARD_SIZE};
use crate::marble::MarbleId;

/// Number of neutral marbles on a fresh board
pub const NEUTRAL_MARBLES: usize = 13;

/// Starting cells of the first registered player: two opposite corners
pub const FIRST_PLAYER_START: [(i32, i32); 8] = [
    (0, 0),
    (0, 1),
    (1, 0),
    (1, 1),
    (5, 5),
    (5, 6),
    (6, 5),
    (6, 6),
];

/// Starting cells of the second registered player: the other two corners
pub const SECOND_PLAYER_START: [(i32, i32); 8] = [
    (0, 5),
    (0, 6),
    (1, 5),
    (1, 6),
    (5, 0),
    (5, 1),
    (6, 0),
    (6, 1),
];

/// Starting cells of the neutral marbles: the center cross
pub const NEUTRAL_START: [(i32, i32); NEUTRAL_MARBLES] = [
    (1, 3),
    (2, 2),
    (2, 3),
    (2, 4),
    (3, 1),
    (3, 2),
    (3, 3),
    (3, 4),
    (3, 5),
    (4, 2),
    (4, 3),
    (4, 4),
    (5, 3),
];

const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// The 7x7 grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<MarbleId>; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Whether `coord` names a cell on this board
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.in_bounds()
    }

    /// The marble at `coord`, or `None` for an empty or off-board cell
    pub fn at(&self, coord: Coord) -> Option<MarbleId> {
        if !coord.in_bounds() {
            return None;
        }
        self.cells[coord.index()]
    }

    /// Whether `coord` is on the board and holds no marble
    pub fn is_empty_cell(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.cells[coord.index()].is_none()
    }

    /// Whether `coord` is off the board or holds no marble
    pub fn is_open(&self, coord: Coord) -> bool {
        self.at(coord).is_none()
    }

    /// Put `marble` (or nothing) at an on-board cell
    pub fn set(&mut self, coord: Coord, marble: Option<MarbleId>) {
        debug_assert!(coord.in_bounds(), "set called off the board at {coord}");
        if coord.in_bounds() {
            self.cells[coord.index()] = marble;
        }
    }

    /// Every occupied cell with the marble on it, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Coord, MarbleId)> + '_ {
        Coord::all().filter_map(|c| self.at(c).map(|m| (c, m)))
    }

    /// Number of marbles on the board
    pub fn marble_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marble_count(), 0);
        assert!(Coord::all().all(|c| board.is_empty_cell(c)));
    }

    #[test]
    fn test_set_and_at() {
        let mut board = Board::new();
        let c = Coord::new(2, 4);
        board.set(c, Some(MarbleId(7)));
        assert_eq!(board.at(c), Some(MarbleId(7)));
        assert!(!board.is_empty_cell(c));
        assert!(!board.is_open(c));

        board.set(c, None);
        assert_eq!(board.at(c), None);
    }

    #[test]
    fn test_off_board_reads_as_open() {
        let board = Board::new();
        let off = Coord::new(-1, 3);
        assert!(!board.in_bounds(off));
        assert_eq!(board.at(off), None);
        assert!(board.is_open(off));
        assert!(!board.is_empty_cell(off));
    }

    #[test]
    fn test_starting_layouts_do_not_overlap() {
        let mut seen = HashSet::new();
        for (r, c) in FIRST_PLAYER_START
            .iter()
            .chain(SECOND_PLAYER_START.iter())
            .chain(NEUTRAL_START.iter())
        {
            assert!(Coord::new(*r, *c).in_bounds());
            assert!(seen.insert((*r, *c)), "({r}, {c}) listed twice");
        }
        assert_eq!(seen.len(), 29);
    }

    #[test]
    fn test_occupied_iterates_row_major() {
        let mut board = Board::new();
        board.set(Coord::new(4, 0), Some(MarbleId(1)));
        board.set(Coord::new(0, 6), Some(MarbleId(2)));
        let occupied: Vec<_> = board.occupied().collect();
        assert_eq!(
            occupied,
            vec![(Coord::new(0, 6), MarbleId(2)), (Coord::new(4, 0), MarbleId(1))]
        );
    }
}

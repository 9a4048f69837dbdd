//! Grid coordinates and push directions.
//!
//! This module provides the foundational coordinate types for the 7x7 board:
//! - `Coord`: Identifies a cell by (row, col), possibly off the board
//! - `Direction`: One of the four orthogonal push directions
//!
//! Row 0 is the top edge of the board. "Forward" moves toward row 0 and
//! "Backward" toward row 6, matching how the players sit at the table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of rows and columns on the board
pub const BOARD_SIZE: i32 = 7;

/// Errors from parsing text into game values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unknown direction: {0:?}")]
    Direction(String),

    #[error("Unknown player color: {0:?}")]
    Color(String),
}

/// Direction a line of marbles is pushed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward column 0
    Left,
    /// Toward column 6
    Right,
    /// Toward row 0
    Forward,
    /// Toward row 6
    Backward,
}

impl Direction {
    /// All directions
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
    ];

    /// The direction that undoes this one
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Forward => Direction::Backward,
            Direction::Backward => Direction::Forward,
        }
    }

    /// (row, col) delta of a single step
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::Forward => (-1, 0),
            Direction::Backward => (1, 0),
        }
    }

    /// Canonical upper-case letter
    pub const fn letter(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
            Direction::Forward => 'F',
            Direction::Backward => 'B',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    /// Accepts `L`, `R`, `F`, `B` or the full word, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" | "LEFT" => Ok(Direction::Left),
            "R" | "RIGHT" => Ok(Direction::Right),
            "F" | "FORWARD" => Ok(Direction::Forward),
            "B" | "BACKWARD" => Ok(Direction::Backward),
            _ => Err(ParseError::Direction(s.to_string())),
        }
    }
}

/// A cell position as (row, col).
///
/// Either component may fall outside `0..BOARD_SIZE`; such a coordinate is
/// "off-board" and only ever appears while computing a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Create a new coordinate
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Whether this coordinate names a real cell
    pub const fn in_bounds(&self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// The neighboring coordinate one step in `direction`
    pub const fn step(&self, direction: Direction) -> Coord {
        let (dr, dc) = direction.delta();
        Coord::new(self.row + dr, self.col + dc)
    }

    /// The neighboring coordinate opposite to `direction`
    pub const fn behind(&self, direction: Direction) -> Coord {
        self.step(direction.opposite())
    }

    /// Flat index into a row-major cell array. Caller checks `in_bounds`.
    pub(crate) fn index(&self) -> usize {
        (self.row * BOARD_SIZE + self.col) as usize
    }

    /// Every on-board coordinate in row-major order
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn test_step_and_behind() {
        let c = Coord::new(3, 3);
        assert_eq!(c.step(Direction::Left), Coord::new(3, 2));
        assert_eq!(c.step(Direction::Right), Coord::new(3, 4));
        assert_eq!(c.step(Direction::Forward), Coord::new(2, 3));
        assert_eq!(c.step(Direction::Backward), Coord::new(4, 3));

        // Behind a left push is the cell to the right
        assert_eq!(c.behind(Direction::Left), Coord::new(3, 4));
        assert_eq!(c.behind(Direction::Forward), Coord::new(4, 3));
    }

    #[test]
    fn test_in_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(6, 6).in_bounds());
        assert!(!Coord::new(-1, 0).in_bounds());
        assert!(!Coord::new(0, 7).in_bounds());
        assert!(!Coord::new(7, 3).in_bounds());
    }

    #[test]
    fn test_all_coords() {
        let all: Vec<Coord> = Coord::all().collect();
        assert_eq!(all.len(), 49);
        assert!(all.iter().all(|c| c.in_bounds()));
        assert_eq!(all[8], Coord::new(1, 1));
        assert_eq!(all[8].index(), 8);
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("l".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("R".parse::<Direction>(), Ok(Direction::Right));
        assert_eq!("forward".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!(" B ".parse::<Direction>(), Ok(Direction::Backward));
        assert!("X".parse::<Direction>().is_err());
        assert!("".parse::<Direction>().is_err());
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_display_is_upper_case() {
        let letters: String = Direction::ALL.iter().map(|d| d.to_string()).collect();
        assert_eq!(letters, "LRFB");
    }
}

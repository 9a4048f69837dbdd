//! Marbles and their colors.
//!
//! Every marble in a game lives in a single arena owned by the game and is
//! referred to by its `MarbleId`. The board stores ids, never marbles, so a
//! captured marble leaves no dangling reference behind.

use crate::coord::Coord;
use crate::player::{PlayerColor, PlayerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a marble in the game's arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MarbleId(pub usize);

impl MarbleId {
    /// Position in the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Marble color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarbleColor {
    White,
    Black,
    /// Neutral marbles, owned by nobody
    Red,
}

impl MarbleColor {
    /// Single-letter symbol
    pub const fn symbol(self) -> char {
        match self {
            MarbleColor::White => 'W',
            MarbleColor::Black => 'B',
            MarbleColor::Red => 'R',
        }
    }

    pub const fn is_neutral(self) -> bool {
        matches!(self, MarbleColor::Red)
    }
}

impl From<PlayerColor> for MarbleColor {
    fn from(color: PlayerColor) -> Self {
        match color {
            PlayerColor::White => MarbleColor::White,
            PlayerColor::Black => MarbleColor::Black,
        }
    }
}

impl fmt::Display for MarbleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A single marble.
///
/// Color and owner are fixed at creation. `position` is `None` once the
/// marble has been pushed off the board, so "captured" and "has no cell"
/// can never disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marble {
    color: MarbleColor,
    owner: Option<PlayerId>,
    position: Option<Coord>,
}

impl Marble {
    /// Create a marble owned by a player
    pub fn owned(owner: PlayerId, color: PlayerColor, position: Coord) -> Self {
        Self {
            color: color.into(),
            owner: Some(owner),
            position: Some(position),
        }
    }

    /// Create a neutral (red) marble
    pub fn neutral(position: Coord) -> Self {
        Self {
            color: MarbleColor::Red,
            owner: None,
            position: Some(position),
        }
    }

    pub fn color(&self) -> MarbleColor {
        self.color
    }

    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    /// Current cell, or `None` if captured
    pub fn position(&self) -> Option<Coord> {
        self.position
    }

    pub fn is_captured(&self) -> bool {
        self.position.is_none()
    }

    pub(crate) fn move_to(&mut self, position: Coord) {
        self.position = Some(position);
    }

    pub(crate) fn capture(&mut self) {
        self.position = None;
    }
}

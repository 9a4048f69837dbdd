//! Player state and capture bookkeeping.
//!
//! This module contains:
//! - PlayerColor, the side a player plays
//! - Player struct with owned marbles, capture piles, and the move flag

use crate::coord::ParseError;
use crate::marble::MarbleId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Player identifier (0 or 1, in the order the players were registered)
pub type PlayerId = u8;

/// Number of marbles each player starts with
pub const MARBLES_PER_PLAYER: usize = 8;

/// Side a player plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerColor {
    White,
    Black,
}

impl fmt::Display for PlayerColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::White => write!(f, "White"),
            PlayerColor::Black => write!(f, "Black"),
        }
    }
}

impl FromStr for PlayerColor {
    type Err = ParseError;

    /// Accepts `W`, `B` or the full word, in any case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "W" | "WHITE" => Ok(PlayerColor::White),
            "B" | "BLACK" => Ok(PlayerColor::Black),
            _ => Err(ParseError::Color(s.to_string())),
        }
    }
}

/// A single player's state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    /// Player ID (0-1)
    pub id: PlayerId,
    /// Display name, matched case-insensitively
    pub name: String,
    /// Side this player plays
    pub color: PlayerColor,
    /// Marbles dealt at game start; membership never changes
    owned: Vec<MarbleId>,
    /// Neutral marbles this player has pushed off, in capture order
    captured_neutral: Vec<MarbleId>,
    /// Opponent marbles this player has pushed off, in capture order
    captured_opponent: Vec<MarbleId>,
    /// Cleared when the game ends
    pub can_move: bool,
}

impl Player {
    /// Create a new player holding the given marbles
    pub fn new(id: PlayerId, name: String, color: PlayerColor, owned: Vec<MarbleId>) -> Self {
        Self {
            id,
            name,
            color,
            owned,
            captured_neutral: Vec::new(),
            captured_opponent: Vec::new(),
            can_move: true,
        }
    }

    /// Case-insensitive name comparison
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    pub fn owned_marbles(&self) -> &[MarbleId] {
        &self.owned
    }

    pub fn captured_neutral(&self) -> &[MarbleId] {
        &self.captured_neutral
    }

    pub fn captured_opponent(&self) -> &[MarbleId] {
        &self.captured_opponent
    }

    /// Total marbles this player has captured
    pub fn total_captured(&self) -> usize {
        self.captured_neutral.len() + self.captured_opponent.len()
    }

    pub(crate) fn add_captured_neutral(&mut self, marble: MarbleId) {
        self.captured_neutral.push(marble);
    }

    pub(crate) fn add_captured_opponent(&mut self, marble: MarbleId) {
        self.captured_opponent.push(marble);
    }
}

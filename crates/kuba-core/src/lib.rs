//! Kuba - a rules engine for the two-player marble pushing game
//!
//! This crate provides the core game logic for Kuba, including:
//! - Coordinates and push directions on the 7x7 board
//! - Board storage and the marble arena
//! - Player state and capture piles
//! - Move validation, push execution, and win detection
//!
//! # Modules
//!
//! - [`coord`]: Cell coordinates and directions
//! - [`board`]: The grid and the standard starting layout
//! - [`marble`]: Marbles and their colors
//! - [`player`]: Player state
//! - [`game`]: Game state machine
//! - [`actions`]: Events produced by moves
//!
//! ```
//! use kuba_core::{Coord, Game, PlayerColor, PlayerSetup};
//!
//! let mut game = Game::new(
//!     PlayerSetup::new("Alice", PlayerColor::White),
//!     PlayerSetup::new("Bob", PlayerColor::Black),
//! )
//! .unwrap();
//!
//! assert!(game.submit_move("Alice", (6, 5), "F"));
//! assert_eq!(game.current_turn(), Some("Bob"));
//! assert!(!game.submit_move("Alice", Coord::new(0, 0), "R"));
//! ```

pub mod actions;
pub mod board;
pub mod coord;
mod executor;
pub mod game;
pub mod marble;
pub mod player;
mod validator;

// Re-export commonly used types
pub use actions::{GameEvent, WinReason};
pub use board::{Board, NEUTRAL_MARBLES};
pub use coord::{Coord, Direction, ParseError, BOARD_SIZE};
pub use game::{
    Game, GameError, GameStatus, MarbleCount, PlayerSetup, ReverseMove, NEUTRAL_CAPTURES_TO_WIN,
    OPPONENT_CAPTURES_TO_WIN, TOTAL_MARBLES,
};
pub use marble::{Marble, MarbleColor, MarbleId};
pub use player::{Player, PlayerColor, PlayerId, MARBLES_PER_PLAYER};

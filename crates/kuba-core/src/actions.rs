//! Events produced by applying a move.

use crate::coord::{Coord, Direction};
use crate::marble::MarbleColor;
use crate::player::PlayerId;
use serde::{Deserialize, Serialize};

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// Winner pushed off all of the opponent's marbles
    OpponentMarblesCaptured,
    /// Winner pushed off enough neutral marbles
    NeutralMarblesCaptured,
    /// The loser has no marble that can be pushed
    OpponentBlocked,
}

/// Events that occur as a result of a move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A line of marbles moved one cell
    MarblesPushed {
        player: PlayerId,
        origin: Coord,
        direction: Direction,
        /// Number of marbles in the pushed line, including the one at `origin`
        line_length: usize,
    },

    /// A marble was pushed off the board
    MarbleCaptured {
        player: PlayerId,
        color: MarbleColor,
        /// Last on-board cell of the captured marble
        from: Coord,
    },

    /// The other player is now to move
    TurnPassed { next: PlayerId },

    /// A player won the game
    GameWon { winner: PlayerId, reason: WinReason },
}

//! Core game state machine.
//!
//! This module contains the `Game` aggregate: the board, the marble arena,
//! both players, and the turn/win bookkeeping. Every move flows through
//! `apply_move`: validate, plan the push, commit it, check for a winner,
//! then pass the turn.

use crate::actions::{GameEvent, WinReason};
use crate::board::{Board, FIRST_PLAYER_START, NEUTRAL_MARBLES, NEUTRAL_START, SECOND_PLAYER_START};
use crate::coord::{Coord, Direction, BOARD_SIZE};
use crate::marble::{Marble, MarbleColor, MarbleId};
use crate::player::{Player, PlayerColor, PlayerId, MARBLES_PER_PLAYER};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Opponent marbles a player must capture to win
pub const OPPONENT_CAPTURES_TO_WIN: usize = 8;

/// Neutral marbles a player must capture to win
pub const NEUTRAL_CAPTURES_TO_WIN: usize = 7;

/// Marbles on a standard starting board
pub const TOTAL_MARBLES: usize = 2 * MARBLES_PER_PLAYER + NEUTRAL_MARBLES;

/// Game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Finished,
}

/// Reasons a move or a new game can be refused
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Game is over")]
    GameOver,

    #[error("No player named {0:?} in this game")]
    UnknownPlayer(String),

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Player cannot move")]
    CannotMove,

    #[error("Cell {0} is off the board")]
    OutOfBounds(Coord),

    #[error("No marble at {0}")]
    EmptyCell(Coord),

    #[error("Marble at {0} belongs to the opponent")]
    OpponentMarble(Coord),

    #[error("Invalid direction")]
    InvalidDirection,

    #[error("Marble at {0} is blocked from behind")]
    Blocked(Coord),

    #[error("Move would undo the previous push")]
    ReversesLastMove,

    #[error("Move would push off your own marble")]
    SelfCapture,

    #[error("Both players chose {0}")]
    DuplicateColor(PlayerColor),

    #[error("Starting cell {0} is off the board or used twice")]
    InvalidLayout(Coord),
}

/// Name and side of a player joining a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSetup {
    pub name: String,
    pub color: PlayerColor,
}

impl PlayerSetup {
    pub fn new(name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Uncaptured marbles of each color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarbleCount {
    pub white: usize,
    pub black: usize,
    pub red: usize,
}

impl MarbleCount {
    pub fn total(&self) -> usize {
        self.white + self.black + self.red
    }
}

/// The one move that is currently forbidden because it would exactly undo
/// the last non-capturing push
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReverseMove {
    pub origin: Coord,
    pub direction: Direction,
}

/// The complete game state
#[derive(Debug, Clone)]
pub struct Game {
    /// The board; cells hold ids into `marbles`
    pub(crate) board: Board,
    /// Every marble created for this game, captured or not
    pub(crate) marbles: Vec<Marble>,
    /// Both players, indexed by `PlayerId`
    pub(crate) players: [Player; 2],
    pub(crate) status: GameStatus,
    /// `None` before the first move and after the game ends
    pub(crate) current_turn: Option<PlayerId>,
    pub(crate) winner: Option<PlayerId>,
    pub(crate) reverse_move: Option<ReverseMove>,
}

impl Game {
    /// Create a new game on the standard starting board.
    ///
    /// The first player takes the top-left and bottom-right corners, the
    /// second player the other two.
    pub fn new(first: PlayerSetup, second: PlayerSetup) -> Result<Self, GameError> {
        let cells = |start: &[(i32, i32)]| start.iter().map(|&rc| Coord::from(rc)).collect::<Vec<_>>();
        Self::with_layout(
            first,
            second,
            &cells(&FIRST_PLAYER_START[..]),
            &cells(&SECOND_PLAYER_START[..]),
            &cells(&NEUTRAL_START[..]),
        )
    }

    /// Create a game from a custom starting position
    pub fn with_layout(
        first: PlayerSetup,
        second: PlayerSetup,
        first_cells: &[Coord],
        second_cells: &[Coord],
        neutral_cells: &[Coord],
    ) -> Result<Self, GameError> {
        if first.color == second.color {
            return Err(GameError::DuplicateColor(first.color));
        }

        let mut board = Board::new();
        let mut marbles = Vec::with_capacity(first_cells.len() + second_cells.len() + neutral_cells.len());

        let mut place = |marble: Marble, cell: Coord| -> Result<MarbleId, GameError> {
            if !board.is_empty_cell(cell) {
                return Err(GameError::InvalidLayout(cell));
            }
            let id = MarbleId(marbles.len());
            board.set(cell, Some(id));
            marbles.push(marble);
            Ok(id)
        };

        let mut owned = [Vec::new(), Vec::new()];
        for (player, (setup, cells)) in [(&first, first_cells), (&second, second_cells)]
            .into_iter()
            .enumerate()
        {
            for &cell in cells {
                let id = place(Marble::owned(player as PlayerId, setup.color, cell), cell)?;
                owned[player].push(id);
            }
        }
        for &cell in neutral_cells {
            place(Marble::neutral(cell), cell)?;
        }

        let [first_owned, second_owned] = owned;
        let players = [
            Player::new(0, first.name, first.color, first_owned),
            Player::new(1, second.name, second.color, second_owned),
        ];

        Ok(Self {
            board,
            marbles,
            players,
            status: GameStatus::InProgress,
            current_turn: None,
            winner: None,
            reverse_move: None,
        })
    }

    // ==================== Queries ====================

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Get a player by ID
    pub fn get_player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id as usize)
    }

    /// Look up a player by name, ignoring case
    pub fn player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.has_name(name))
    }

    /// Get a marble by ID
    pub fn marble(&self, id: MarbleId) -> Option<&Marble> {
        self.marbles.get(id.index())
    }

    /// Every marble in the game, captured ones included
    pub fn marbles(&self) -> impl Iterator<Item = (MarbleId, &Marble)> {
        self.marbles.iter().enumerate().map(|(i, m)| (MarbleId(i), m))
    }

    /// Name of the player whose turn it is
    pub fn current_turn(&self) -> Option<&str> {
        self.current_turn.map(|id| self.players[id as usize].name.as_str())
    }

    /// Name of the winner
    pub fn winner(&self) -> Option<&str> {
        self.winner.map(|id| self.players[id as usize].name.as_str())
    }

    /// The move currently forbidden by the no-undo rule
    pub fn reverse_move(&self) -> Option<ReverseMove> {
        self.reverse_move
    }

    /// Color of the marble at `coord`; `None` for an empty or off-board cell
    pub fn marble_at(&self, coord: Coord) -> Option<MarbleColor> {
        self.board
            .at(coord)
            .and_then(|id| self.marble(id))
            .map(Marble::color)
    }

    /// Uncaptured marbles of each color
    pub fn marble_count(&self) -> MarbleCount {
        let mut count = MarbleCount::default();
        for marble in self.marbles.iter().filter(|m| !m.is_captured()) {
            match marble.color() {
                MarbleColor::White => count.white += 1,
                MarbleColor::Black => count.black += 1,
                MarbleColor::Red => count.red += 1,
            }
        }
        count
    }

    /// Neutral marbles captured by the named player (0 for an unknown name)
    pub fn get_captured(&self, name: &str) -> usize {
        self.player(name).map_or(0, |p| p.captured_neutral().len())
    }

    /// Colors of every cell, row-major
    pub fn board_snapshot(&self) -> [[Option<MarbleColor>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        let mut snapshot = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for coord in Coord::all() {
            snapshot[coord.row as usize][coord.col as usize] = self.marble_at(coord);
        }
        snapshot
    }

    /// Every move the named player could make right now
    pub fn legal_moves(&self, name: &str) -> Vec<(Coord, Direction)> {
        let mut moves = Vec::new();
        for (origin, _) in self.board.occupied() {
            for direction in Direction::ALL {
                let legal = self
                    .check_move(name, origin, Some(direction))
                    .and_then(|player| self.plan_push(player, origin, direction));
                if legal.is_ok() {
                    moves.push((origin, direction));
                }
            }
        }
        moves
    }

    // ==================== Moves ====================

    /// Apply a move for the named player.
    ///
    /// On error nothing about the game has changed.
    pub fn apply_move(
        &mut self,
        player: &str,
        origin: Coord,
        direction: Direction,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.apply(player, origin, Some(direction))
    }

    /// Apply a move with the direction given as text (`L`, `R`, `F`, `B`).
    ///
    /// A malformed direction fails the direction check in its usual place,
    /// so an earlier failure (wrong turn, unknown player) is reported first.
    pub fn apply_text_move(
        &mut self,
        player: &str,
        origin: Coord,
        direction: &str,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.apply(player, origin, direction.parse().ok())
    }

    /// Submit a move with the direction given as text.
    ///
    /// Returns `true` if the move was applied. Unknown players, malformed
    /// directions and illegal moves all return `false`.
    pub fn submit_move(&mut self, player: &str, origin: impl Into<Coord>, direction: &str) -> bool {
        self.apply_text_move(player, origin.into(), direction).is_ok()
    }

    fn apply(
        &mut self,
        name: &str,
        origin: Coord,
        direction: Option<Direction>,
    ) -> Result<Vec<GameEvent>, GameError> {
        let result = self.check_move(name, origin, direction).and_then(|player| {
            // check_move only succeeds with a direction
            let direction = direction.ok_or(GameError::InvalidDirection)?;
            let plan = self.plan_push(player, origin, direction)?;
            Ok((player, plan))
        });

        let (player, plan) = match result {
            Ok(ok) => ok,
            Err(e) => {
                debug!(player = name, %origin, error = %e, "move rejected");
                return Err(e);
            }
        };

        let mut events = self.execute_push(player, plan);

        if let Some((winner, reason)) = self.check_winner() {
            self.finish(winner);
            info!(winner = %self.players[winner as usize].name, ?reason, "game won");
            events.push(GameEvent::GameWon { winner, reason });
        } else {
            let next = opponent(player);
            self.current_turn = Some(next);
            events.push(GameEvent::TurnPassed { next });
        }

        Ok(events)
    }

    // ==================== Win Detection ====================

    /// First satisfied win condition, checked in a fixed order
    fn check_winner(&self) -> Option<(PlayerId, WinReason)> {
        for player in &self.players {
            if player.captured_opponent().len() >= OPPONENT_CAPTURES_TO_WIN {
                return Some((player.id, WinReason::OpponentMarblesCaptured));
            }
            if player.captured_neutral().len() >= NEUTRAL_CAPTURES_TO_WIN {
                return Some((player.id, WinReason::NeutralMarblesCaptured));
            }
        }

        for player in &self.players {
            if !self.has_pushable_marble(player) {
                return Some((opponent(player.id), WinReason::OpponentBlocked));
            }
        }

        None
    }

    /// Whether any of the player's marbles on the board has an open cell
    /// behind it in at least one direction
    fn has_pushable_marble(&self, player: &Player) -> bool {
        player
            .owned_marbles()
            .iter()
            .filter_map(|&id| self.marble(id).and_then(Marble::position))
            .any(|pos| {
                Direction::ALL
                    .iter()
                    .any(|&dir| self.board.is_open(pos.behind(dir)))
            })
    }

    fn finish(&mut self, winner: PlayerId) {
        self.status = GameStatus::Finished;
        self.winner = Some(winner);
        self.current_turn = None;
        for player in &mut self.players {
            player.can_move = false;
        }
    }
}

/// The other player
pub(crate) fn opponent(player: PlayerId) -> PlayerId {
    1 - player
}

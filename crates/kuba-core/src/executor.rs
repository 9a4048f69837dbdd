//! Push execution.
//!
//! A push is worked out first as a `PushPlan` against the unchanged board.
//! Only the far end of a line can leave the board, so a self-capture is
//! known before anything moves and a refused push never touches the game.

use crate::actions::GameEvent;
use crate::coord::{Coord, Direction};
use crate::game::{Game, GameError, ReverseMove};
use crate::marble::MarbleId;
use crate::player::PlayerId;
use tracing::debug;

/// A validated push, ready to commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PushPlan {
    pub origin: Coord,
    pub direction: Direction,
    /// Contiguous marbles from `origin` onward, origin first
    pub line: Vec<(MarbleId, Coord)>,
    /// Whether the far end of the line leaves the board
    pub captures: bool,
}

impl Game {
    /// The contiguous run of marbles starting at `origin` in `direction`
    fn pushed_line(&self, origin: Coord, direction: Direction) -> Vec<(MarbleId, Coord)> {
        let mut line = Vec::new();
        let mut cell = origin;
        while let Some(id) = self.board.at(cell) {
            line.push((id, cell));
            cell = cell.step(direction);
        }
        line
    }

    /// Work out what pushing from `origin` would do, refusing self-captures
    pub(crate) fn plan_push(
        &self,
        player: PlayerId,
        origin: Coord,
        direction: Direction,
    ) -> Result<PushPlan, GameError> {
        let line = self.pushed_line(origin, direction);

        let captures = match line.last() {
            Some(&(far, at)) if !at.step(direction).in_bounds() => {
                let owner = self.marble(far).and_then(|m| m.owner());
                if owner == Some(player) {
                    return Err(GameError::SelfCapture);
                }
                true
            }
            Some(_) => false,
            None => return Err(GameError::EmptyCell(origin)),
        };

        Ok(PushPlan {
            origin,
            direction,
            line,
            captures,
        })
    }

    /// Move every marble in the plan one cell, far end first, and record
    /// any capture for `player`
    pub(crate) fn execute_push(&mut self, player: PlayerId, plan: PushPlan) -> Vec<GameEvent> {
        let PushPlan {
            origin,
            direction,
            line,
            captures,
        } = plan;

        let mut events = vec![GameEvent::MarblesPushed {
            player,
            origin,
            direction,
            line_length: line.len(),
        }];

        for &(id, from) in line.iter().rev() {
            self.board.set(from, None);
            let to = from.step(direction);

            if to.in_bounds() {
                self.board.set(to, Some(id));
                self.marbles[id.index()].move_to(to);
                continue;
            }

            let marble = &mut self.marbles[id.index()];
            marble.capture();
            let color = marble.color();

            let mover = &mut self.players[player as usize];
            if color.is_neutral() {
                mover.add_captured_neutral(id);
            } else {
                mover.add_captured_opponent(id);
            }

            debug!(player = %mover.name, %from, %color, "marble captured");
            events.push(GameEvent::MarbleCaptured {
                player,
                color,
                from,
            });
        }

        // A capture can never be undone, so the previous reverse move stands
        if !captures {
            if let Some(&(_, last)) = line.last() {
                self.reverse_move = Some(ReverseMove {
                    origin: last.step(direction),
                    direction: direction.opposite(),
                });
            }
        }

        debug!(%origin, %direction, length = line.len(), captures, "line pushed");
        events
    }
}

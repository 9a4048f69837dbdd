//! Move validation.
//!
//! Validation never mutates the game. Checks run in a fixed order and the
//! first one that fails decides the error.

use crate::coord::{Coord, Direction};
use crate::game::{opponent, Game, GameError, GameStatus, ReverseMove};
use crate::player::PlayerId;

impl Game {
    /// Check whether the named player may push the marble at `origin`.
    ///
    /// This does not look at what the push would do; a move that passes
    /// here can still fail as a self-capture when applied.
    pub fn validate_move(
        &self,
        player: &str,
        origin: Coord,
        direction: Direction,
    ) -> Result<(), GameError> {
        self.check_move(player, origin, Some(direction)).map(|_| ())
    }

    /// Boolean form of `validate_move`
    pub fn is_legal(&self, player: &str, origin: Coord, direction: Direction) -> bool {
        self.validate_move(player, origin, direction).is_ok()
    }

    /// Runs every check and returns the mover's id. `direction` is `None`
    /// when the caller's direction text did not parse.
    pub(crate) fn check_move(
        &self,
        name: &str,
        origin: Coord,
        direction: Option<Direction>,
    ) -> Result<PlayerId, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::GameOver);
        }

        let player = self
            .player(name)
            .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;

        // Anyone may open the game
        if let Some(turn) = self.current_turn {
            if turn != player.id {
                return Err(GameError::NotYourTurn);
            }
        }

        if !player.can_move {
            return Err(GameError::CannotMove);
        }

        if !origin.in_bounds() {
            return Err(GameError::OutOfBounds(origin));
        }

        let marble = self
            .board
            .at(origin)
            .and_then(|id| self.marble(id))
            .ok_or(GameError::EmptyCell(origin))?;

        if marble.owner() == Some(opponent(player.id)) {
            return Err(GameError::OpponentMarble(origin));
        }

        let direction = direction.ok_or(GameError::InvalidDirection)?;

        // A marble can only be pushed from an open side
        if !self.board.is_open(origin.behind(direction)) {
            return Err(GameError::Blocked(origin));
        }

        if self.reverse_move == Some(ReverseMove { origin, direction }) {
            return Err(GameError::ReversesLastMove);
        }

        Ok(player.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PlayerSetup;
    use crate::player::PlayerColor;

    fn new_game() -> Game {
        Game::new(
            PlayerSetup::new("Alice", PlayerColor::White),
            PlayerSetup::new("Bob", PlayerColor::Black),
        )
        .unwrap()
    }

    fn check(game: &Game, name: &str, row: i32, col: i32, dir: Direction) -> Result<(), GameError> {
        game.validate_move(name, Coord::new(row, col), dir)
    }

    #[test]
    fn test_corner_marble_can_be_pushed_inward() {
        let game = new_game();
        // (0,0) has the edge above and to the left
        assert_eq!(check(&game, "Alice", 0, 0, Direction::Right), Ok(()));
        assert_eq!(check(&game, "Alice", 0, 0, Direction::Backward), Ok(()));
        // but (0,1) and (1,0) hold it from the other sides
        assert_eq!(
            check(&game, "Alice", 0, 0, Direction::Left),
            Err(GameError::Blocked(Coord::new(0, 0)))
        );
        assert_eq!(
            check(&game, "Alice", 0, 0, Direction::Forward),
            Err(GameError::Blocked(Coord::new(0, 0)))
        );
    }

    #[test]
    fn test_unknown_player() {
        let game = new_game();
        assert_eq!(
            check(&game, "Carol", 0, 0, Direction::Right),
            Err(GameError::UnknownPlayer("Carol".to_string()))
        );
        // Names match regardless of case
        assert_eq!(check(&game, "aLiCe", 0, 0, Direction::Right), Ok(()));
    }

    #[test]
    fn test_either_player_may_open() {
        let game = new_game();
        assert!(game.is_legal("Alice", Coord::new(0, 0), Direction::Right));
        assert!(game.is_legal("Bob", Coord::new(0, 6), Direction::Left));
    }

    #[test]
    fn test_turn_is_enforced_once_set() {
        let mut game = new_game();
        game.current_turn = Some(1);
        assert_eq!(
            check(&game, "Alice", 0, 0, Direction::Right),
            Err(GameError::NotYourTurn)
        );
        assert_eq!(check(&game, "Bob", 0, 6, Direction::Left), Ok(()));
    }

    #[test]
    fn test_cannot_move_flag() {
        let mut game = new_game();
        game.players[0].can_move = false;
        assert_eq!(
            check(&game, "Alice", 0, 0, Direction::Right),
            Err(GameError::CannotMove)
        );
    }

    #[test]
    fn test_out_of_bounds_and_empty() {
        let game = new_game();
        assert_eq!(
            check(&game, "Alice", 7, 0, Direction::Right),
            Err(GameError::OutOfBounds(Coord::new(7, 0)))
        );
        assert_eq!(
            check(&game, "Alice", 0, -1, Direction::Right),
            Err(GameError::OutOfBounds(Coord::new(0, -1)))
        );
        assert_eq!(
            check(&game, "Alice", 0, 3, Direction::Backward),
            Err(GameError::EmptyCell(Coord::new(0, 3)))
        );
    }

    #[test]
    fn test_opponent_marble_cannot_be_grabbed() {
        let game = new_game();
        assert_eq!(
            check(&game, "Alice", 0, 6, Direction::Left),
            Err(GameError::OpponentMarble(Coord::new(0, 6)))
        );
    }

    #[test]
    fn test_neutral_marble_is_pushable() {
        let game = new_game();
        // (1,3) has an empty cell at (0,3) above it
        assert_eq!(check(&game, "Bob", 1, 3, Direction::Backward), Ok(()));
    }

    #[test]
    fn test_invalid_direction_is_checked_after_ownership() {
        let game = new_game();
        assert_eq!(
            game.check_move("Alice", Coord::new(0, 0), None),
            Err(GameError::InvalidDirection)
        );
        assert_eq!(
            game.check_move("Alice", Coord::new(0, 6), None),
            Err(GameError::OpponentMarble(Coord::new(0, 6)))
        );
    }

    #[test]
    fn test_reverse_move_forbidden() {
        let mut game = new_game();
        game.reverse_move = Some(ReverseMove {
            origin: Coord::new(0, 0),
            direction: Direction::Right,
        });
        assert_eq!(
            check(&game, "Alice", 0, 0, Direction::Right),
            Err(GameError::ReversesLastMove)
        );
        // Same cell, different direction is fine
        assert_eq!(check(&game, "Alice", 0, 0, Direction::Backward), Ok(()));
    }

    #[test]
    fn test_finished_game_rejects_everything() {
        let mut game = new_game();
        game.status = GameStatus::Finished;
        assert_eq!(
            check(&game, "Carol", 9, 9, Direction::Left),
            Err(GameError::GameOver)
        );
    }
}

//! Validated game state machine for drivers.

use crate::board::{Board, TILES};
use crate::types::{GameStatus, Player};
use tracing::instrument;

/// Error from applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("game is already over")]
    GameOver,
    /// The tile index is outside 0-8.
    #[display("tile {} is out of bounds", _0)]
    OutOfBounds(usize),
    /// The tile is already occupied.
    #[display("tile {} is already occupied", _0)]
    Occupied(usize),
}

impl std::error::Error for MoveError {}

/// A running game with move history.
///
/// Wraps a [`Board`] with the validation the board itself does not do:
/// [`Game::make_move`] rejects out-of-range tiles, occupied tiles, and
/// moves after the game has ended. The mark placed is always the one of
/// the side to move, inferred from the position.
#[derive(Debug, Clone, Default)]
pub struct Game {
    board: Board,
    history: Vec<usize>,
}

impl Game {
    /// Creates a game with an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a game from an existing position.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            history: Vec::new(),
        }
    }

    /// Returns the current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the tiles played since this game was created, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.board.to_move()
    }

    /// Returns the game status for the current position.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.board.winner() {
            GameStatus::Won(winner)
        } else if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Applies a move for the side to move and reports the new status.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] if the game is over, the tile index is out
    /// of range, or the tile is occupied. The position is unchanged on
    /// error.
    #[instrument(skip(self), fields(player = ?self.to_move()))]
    pub fn make_move(&mut self, tile: usize) -> Result<GameStatus, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if tile >= TILES {
            return Err(MoveError::OutOfBounds(tile));
        }
        if !self.board.is_free(tile) {
            return Err(MoveError::Occupied(tile));
        }
        self.board.set(tile, self.to_move());
        self.history.push(tile);
        debug_assert!(self.counts_consistent(), "mark counts out of balance");
        Ok(self.status())
    }

    // X moves first, so X holds as many marks as O or exactly one more.
    fn counts_consistent(&self) -> bool {
        let (x, o) = self.board.mark_counts();
        x == o || x == o + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        assert_eq!(game.to_move(), Player::O);
        game.make_move(0).unwrap();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.history(), &[4, 0]);
    }

    #[test]
    fn test_occupied_tile_rejected() {
        let mut game = Game::new();
        game.make_move(4).unwrap();
        assert_eq!(game.make_move(4), Err(MoveError::Occupied(4)));
        // The rejected move changes nothing.
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.history(), &[4]);
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut game = Game::new();
        assert_eq!(game.make_move(9), Err(MoveError::OutOfBounds(9)));
    }

    #[test]
    fn test_win_ends_the_game() {
        let mut game = Game::new();
        for tile in [0, 3, 1, 4] {
            game.make_move(tile).unwrap();
        }
        assert_eq!(game.make_move(2), Ok(GameStatus::Won(Player::X)));
        assert_eq!(game.make_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut game = Game::new();
        // X O X / O X X / O X O, played in an order that never wins early.
        for tile in [0, 1, 2, 3, 4, 6, 5, 8, 7] {
            game.make_move(tile).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_from_board_resumes_position() {
        let board: Board = "XO_______".parse().unwrap();
        let mut game = Game::from_board(board);
        assert_eq!(game.to_move(), Player::X);
        game.make_move(4).unwrap();
        assert_eq!(game.board().to_string(), "XO__X____");
    }
}

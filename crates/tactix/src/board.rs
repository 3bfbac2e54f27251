//! Packed board representation.
//!
//! Nine tiles live in a single `u32`, two bits per tile, with tile 0 in
//! the most significant used pair. Tile codes: 0 empty, 1 X, 2 O. The
//! fourth code is never produced.

use crate::rules;
use crate::types::{Player, Square};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of tiles on the board.
pub const TILES: usize = 9;

/// Bit offset of a tile's two-bit field.
const fn shift(tile: usize) -> u32 {
    2 * (8 - tile as u32)
}

/// A 3x3 tic-tac-toe position.
///
/// Tiles are indexed 0-8 in row-major order (`row = tile / 3`,
/// `col = tile % 3`). `Board` is `Copy`: the search simulates a move by
/// marking a copy, so a caller's position is never disturbed.
///
/// Tile indices outside 0-8 are a contract violation; they are
/// debug-asserted, not defended against in release builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    tiles: u32,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self { tiles: 0 }
    }

    /// Returns the occupant of `tile`.
    pub fn get(&self, tile: usize) -> Square {
        debug_assert!(tile < TILES, "tile index {tile} out of range");
        match (self.tiles >> shift(tile)) & 0b11 {
            0 => Square::Empty,
            1 => Square::Occupied(Player::X),
            _ => Square::Occupied(Player::O),
        }
    }

    /// Marks `tile` for `player`, replacing any prior occupant.
    pub fn set(&mut self, tile: usize, player: Player) {
        self.unset(tile);
        let code: u32 = match player {
            Player::X => 1,
            Player::O => 2,
        };
        self.tiles |= code << shift(tile);
    }

    /// Clears `tile`.
    pub fn unset(&mut self, tile: usize) {
        debug_assert!(tile < TILES, "tile index {tile} out of range");
        self.tiles &= !(0b11 << shift(tile));
    }

    /// Checks if `tile` is empty.
    pub fn is_free(&self, tile: usize) -> bool {
        self.get(tile) == Square::Empty
    }

    /// Checks if no tile is empty.
    pub fn is_full(&self) -> bool {
        self.free_tiles().next().is_none()
    }

    /// Iterates over the empty tiles in ascending order.
    pub fn free_tiles(&self) -> impl Iterator<Item = usize> + '_ {
        (0..TILES).filter(|&tile| self.is_free(tile))
    }

    /// Infers the side to move from occupancy alone.
    ///
    /// X moves first and the marks alternate, so an odd number of empty
    /// tiles means it is X's turn. This holds for any partial board, not
    /// just positions reached through self-play.
    pub fn to_move(&self) -> Player {
        if self.free_tiles().count() % 2 == 1 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Returns the winner, if a completed line exists.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self)
    }

    /// Counts the marks on the board, X first.
    pub(crate) fn mark_counts(&self) -> (usize, usize) {
        let mut x = 0;
        let mut o = 0;
        for tile in 0..TILES {
            match self.get(tile) {
                Square::Occupied(Player::X) => x += 1,
                Square::Occupied(Player::O) => o += 1,
                Square::Empty => {}
            }
        }
        (x, o)
    }
}

/// Error from parsing a board string.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The string does not hold exactly one symbol per tile.
    #[display("expected 9 symbols, got {}", _0)]
    WrongLength(usize),
    /// A character outside the `X`/`O`/`_` alphabet.
    #[display("unrecognized symbol {:?} at tile {}", _0, _1)]
    UnknownSymbol(char, usize),
}

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for Board {
    /// Formats the board as 9 symbols in row-major order.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for tile in 0..TILES {
            write!(f, "{}", self.get(tile).symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parses 9 symbols in row-major order, the exact inverse of
    /// [`Board`]'s `Display` form.
    ///
    /// # Errors
    ///
    /// Rejects strings that are not exactly 9 tiles long and any symbol
    /// outside `X`, `O`, `_`. Unknown symbols are never silently treated
    /// as empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().collect();
        if symbols.len() != TILES {
            return Err(ParseBoardError::WrongLength(symbols.len()));
        }
        let mut board = Board::new();
        for (tile, symbol) in symbols.into_iter().enumerate() {
            match symbol {
                'X' => board.set(tile, Player::X),
                'O' => board.set(tile, Player::O),
                '_' => {}
                other => return Err(ParseBoardError::UnknownSymbol(other, tile)),
            }
        }
        Ok(board)
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

//! Win and draw rules.

use crate::board::Board;
use crate::types::{Player, Square};

/// The 8 winning lines: rows and columns interleaved by index, then the
/// two diagonals. [`winner`] scans in this order and reports the first
/// completed line it finds.
const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [3, 4, 5],
    [1, 4, 7],
    [6, 7, 8],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks the 8 lines for three matching marks.
///
/// Returns `Some(player)` for the first completed line in scan order,
/// `None` otherwise. Reachable positions hold at most one winning
/// player, but nothing here assumes reachability.
pub fn winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Square::Occupied(player) = board.get(a) {
            if board.get(b) == board.get(a) && board.get(c) == board.get(a) {
                return Some(player);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX______".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "_O__O__O_".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "O___O___O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete_line() {
        let board: Board = "XX_______".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(winner(&board), None);
        assert!(board.is_full());
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Not reachable through play; the scan simply reports the first
        // completed line, here the top row before the middle row.
        let board: Board = "XXXOOO___".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }
}

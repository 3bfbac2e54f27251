//! Position evaluator and best-move selection.
//!
//! A recursive search over every legal continuation of a position.
//! Scores are relative: higher is better for the side to move, and each
//! ply of depth decays a score by 7/8, so a win available sooner always
//! outranks an equally certain win available later.

use crate::board::Board;
use tracing::{debug, instrument};

/// Relative position score in `[0, WIN]`.
pub type Score = u32;

/// Score of a position the side to move wins with a single mark.
pub const WIN: Score = 512;

/// Shrinks a score by one ply of search depth.
const fn decay(score: Score) -> Score {
    7 * score / 8
}

/// Checks whether the side to move can complete a line right now.
pub fn winnable(board: &Board) -> bool {
    let to_move = board.to_move();
    board.free_tiles().any(|tile| {
        let mut child = *board;
        child.set(tile, to_move);
        child.winner() == Some(to_move)
    })
}

/// Scores the position for the side to move.
///
/// Returns a value in `[0, WIN]`; higher is better for whoever moves
/// next. `limit` is a branch-and-bound threshold: subtrees that cannot
/// beat it are skipped, which never changes the result, only the work
/// done. Pass 0 to search unconstrained.
pub fn evaluate(board: &Board, limit: Score) -> Score {
    let to_move = board.to_move();
    let mut score = 0;
    if limit < WIN && winnable(board) {
        // A one-move win scores WIN outright.
        score = WIN;
    } else if limit < decay(decay(WIN)) {
        // A win two or more plies out is worth at most decay(decay(WIN)).
        for tile in board.free_tiles() {
            let mut child = *board;
            child.set(tile, to_move);
            // The child is scored from the opponent's side; the running
            // maximum tightens the bound for later branches.
            let evaluation = decay(WIN - evaluate(&child, limit.max(score)));
            score = score.max(evaluation);
        }
    }
    score
}

/// Picks the strongest move for the side to move.
///
/// Every free tile is tried and the one leaving the opponent with the
/// lowest score is kept; equal scores keep the later-examined tile.
/// Returns `None` when the position is terminal (a winner exists or the
/// board is full); callers driving a game should test the position
/// first and treat `None` as a programming error.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board) -> Option<usize> {
    if board.winner().is_some() || board.is_full() {
        return None;
    }
    let to_move = board.to_move();
    let mut best_reply = WIN;
    let mut best_tile = None;
    for tile in board.free_tiles() {
        let mut child = *board;
        child.set(tile, to_move);
        let reply = evaluate(&child, 0);
        if reply <= best_reply {
            best_reply = reply;
            best_tile = Some(tile);
        }
    }
    debug!(?best_tile, best_reply, "move selected");
    best_tile
}

//! Path-clearance helpers shared by the sliding pieces.
//!
//! Both walkers step from just past the origin to just before the
//! destination. The destination occupant is never inspected; capture rules
//! are decided by the caller.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[inline]
fn unit_step(from: Square, to: Square) -> (i8, i8) {
    let (d_row, d_col) = ChessMove::new(from, to).delta();
    (d_row.signum(), d_col.signum())
}

fn walk_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = unit_step(from, to);
    let mut current = from;
    loop {
        current = match current.offset(d_row, d_col) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

/// True when no cell strictly between `from` and `to` on a rank or file is occupied.
///
/// Squares that do not share a row or column are never clear.
pub fn is_straight_path_clear(board: &Board, from: Square, to: Square) -> bool {
    if from == to {
        return true;
    }
    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }
    walk_is_clear(board, from, to)
}

/// True when no cell strictly between `from` and `to` on a diagonal is occupied.
pub fn is_diagonal_path_clear(board: &Board, from: Square, to: Square) -> bool {
    if from == to {
        return true;
    }
    let (d_row, d_col) = ChessMove::new(from, to).delta();
    if d_row.abs() != d_col.abs() {
        return false;
    }
    walk_is_clear(board, from, to)
}

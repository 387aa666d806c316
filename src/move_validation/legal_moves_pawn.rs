//! Pawn movement rules.
//!
//! Pawns only move toward the opponent's back rank: one step onto an empty
//! square, two steps from the start row through two empty squares, or one
//! diagonal step onto an occupied square. En passant is not modelled.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::pawn_start_row;
use crate::game_state::chess_types::*;

pub fn is_valid_pawn_move(board: &Board, color: Color, mv: ChessMove) -> bool {
    let (d_row, d_col) = mv.delta();
    let forward = color.forward();

    if d_row.signum() != forward {
        return false;
    }

    match (d_row.abs(), d_col.abs()) {
        (1, 0) => board.is_empty(mv.to),
        (2, 0) => {
            if mv.from.row() != pawn_start_row(color) {
                return false;
            }
            match mv.from.offset(forward, 0) {
                Some(middle) => board.is_empty(middle) && board.is_empty(mv.to),
                None => false,
            }
        }
        (1, 1) => !board.is_empty(mv.to),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_board(color: Color, at: Square) -> Board {
        let mut board = Board::new_empty();
        board.set(at, Some(Piece::new(color, PieceKind::Pawn)));
        board
    }

    #[test]
    fn single_and_double_step_from_start_row() {
        let board = Board::new_game();
        let e2 = Square::at(6, 4);
        assert!(is_valid_pawn_move(&board, Color::White, ChessMove::new(e2, Square::at(5, 4))));
        assert!(is_valid_pawn_move(&board, Color::White, ChessMove::new(e2, Square::at(4, 4))));
        assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(e2, Square::at(3, 4))));

        let d7 = Square::at(1, 3);
        assert!(is_valid_pawn_move(&board, Color::Black, ChessMove::new(d7, Square::at(3, 3))));
    }

    #[test]
    fn double_step_only_from_start_row() {
        let at = Square::at(5, 4);
        let board = pawn_board(Color::White, at);
        assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(at, Square::at(3, 4))));
    }

    #[test]
    fn double_step_needs_empty_middle_and_destination() {
        let e2 = Square::at(6, 4);
        let mut board = pawn_board(Color::White, e2);
        board.set(Square::at(5, 4), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(e2, Square::at(4, 4))));

        let mut board = pawn_board(Color::White, e2);
        board.set(Square::at(4, 4), Some(Piece::new(Color::Black, PieceKind::Knight)));
        assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(e2, Square::at(4, 4))));
    }

    #[test]
    fn never_backward_or_sideways() {
        let at = Square::at(4, 3);
        let mut board = pawn_board(Color::White, at);
        for (d_row, d_col) in [(1, 0), (1, 1), (1, -1), (0, 1), (0, -1), (2, 0)] {
            let to = at.offset(d_row, d_col).expect("target on board");
            board.set(to, Some(Piece::new(Color::Black, PieceKind::Rook)));
            assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(at, to)));
            board.set(to, None);
            assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(at, to)));
        }

        let board = pawn_board(Color::Black, at);
        for (d_row, d_col) in [(-1, 0), (-1, 1), (0, 1), (0, -1)] {
            let to = at.offset(d_row, d_col).expect("target on board");
            assert!(!is_valid_pawn_move(&board, Color::Black, ChessMove::new(at, to)));
        }
    }

    #[test]
    fn diagonal_only_as_capture() {
        let at = Square::at(4, 3);
        let mut board = pawn_board(Color::White, at);
        let target = Square::at(3, 4);
        assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(at, target)));
        board.set(target, Some(Piece::new(Color::Black, PieceKind::Bishop)));
        assert!(is_valid_pawn_move(&board, Color::White, ChessMove::new(at, target)));
    }

    #[test]
    fn forward_step_is_blocked_by_any_piece() {
        let at = Square::at(4, 3);
        let mut board = pawn_board(Color::White, at);
        board.set(Square::at(3, 3), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert!(!is_valid_pawn_move(&board, Color::White, ChessMove::new(at, Square::at(3, 3))));
    }
}

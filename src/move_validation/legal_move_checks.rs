//! Move legality dispatch and the game-over predicate.
//!
//! `is_valid_move` applies the shared occupancy rules and then hands off to
//! the per-piece rules. It is independent of whose turn it is; the game
//! engine enforces turn order before calling it.
//!
//! Legality here is geometric only. Check, pins, castling, en passant and
//! draws are not modelled, and `is_checkmate` is a placeholder that only
//! reports a missing king. Both are isolated in this module so stricter rules
//! can replace them without touching the engine.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::move_validation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_validation::legal_moves_king::is_valid_king_move;
use crate::move_validation::legal_moves_knight::is_valid_knight_move;
use crate::move_validation::legal_moves_pawn::is_valid_pawn_move;
use crate::move_validation::legal_moves_queen::is_valid_queen_move;
use crate::move_validation::legal_moves_rook::is_valid_rook_move;

pub fn is_valid_move(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };
    if let Some(target) = board.get(to) {
        if target.color == piece.color {
            return false;
        }
    }

    let mv = ChessMove::new(from, to);
    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(board, piece.color, mv),
        PieceKind::Knight => is_valid_knight_move(mv),
        PieceKind::Bishop => is_valid_bishop_move(board, mv),
        PieceKind::Rook => is_valid_rook_move(board, mv),
        PieceKind::Queen => is_valid_queen_move(board, mv),
        PieceKind::King => is_valid_king_move(mv),
    }
}

/// Placeholder game-over test: true only when `color` has no king on the board.
///
/// Kings are captured like any other piece here, so this fires when a king is
/// taken. It is not check or checkmate detection.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    board.find(Piece::new(color, PieceKind::King)).is_none()
}

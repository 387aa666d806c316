//! Canonical rule constants.
//!
//! Board dimensions, the back-rank arrangement, pawn start rows and the
//! default clock allowance used to set up a new game.

use crate::game_state::chess_types::{Color, PieceKind};

pub const BOARD_SIZE: usize = 8;

/// Piece kinds along a back rank, file `a` through file `h`.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Starting clock allowance per side: 20 minutes.
pub const DEFAULT_CLOCK_SECONDS: i64 = 20 * 60;

#[inline]
pub const fn back_rank_row(color: Color) -> usize {
    match color {
        Color::White => 7,
        Color::Black => 0,
    }
}

#[inline]
pub const fn pawn_start_row(color: Color) -> usize {
    match color {
        Color::White => 6,
        Color::Black => 1,
    }
}

/// The row on which a pawn of `color` promotes.
#[inline]
pub const fn promotion_row(color: Color) -> usize {
    back_rank_row(color.opposite())
}

//! Value types shared by the board, the validator and the game engine.
//!
//! Pieces are plain `Copy` values tagged by color and kind. Squares use
//! `(row, col)` coordinates where row 0 is rank 8 and col 0 is file `a`.

use std::fmt;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Whether a pawn may be promoted into this kind.
    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Parse the single-letter promotion shorthand (`q`, `r`, `b`, `n`).
    pub fn from_promotion_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'q' => Some(PieceKind::Queen),
            'r' => Some(PieceKind::Rook),
            'b' => Some(PieceKind::Bishop),
            'n' => Some(PieceKind::Knight),
            _ => None,
        }
    }
}

/// An immutable piece value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Row 0 is rank 8, col 0 is file `a`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Checked constructor for coordinates coming from outside the engine.
    pub fn new(row: usize, col: usize) -> ChessResult<Self> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(ChessError::CoordinateOutOfRange { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Unchecked-by-contract constructor; panics if either coordinate is off the board.
    #[inline]
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square out of range");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self::at(index / BOARD_SIZE, index % BOARD_SIZE)
    }

    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Step by a signed delta, returning `None` when it leaves the board.
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// A candidate relocation; not validated or applied by itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Signed `(row, col)` displacement of the move.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        (
            self.to.row() as i8 - self.from.row() as i8,
            self.to.col() as i8 - self.from.col() as i8,
        )
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_square_rejects_off_board_coordinates() {
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessError::CoordinateOutOfRange { row: 8, col: 0 })
        ));
        assert!(Square::new(0, 8).is_err());
    }

    #[test]
    fn offset_stays_on_board() {
        let a8 = Square::at(0, 0);
        assert_eq!(a8.offset(-1, 0), None);
        assert_eq!(a8.offset(1, 1), Some(Square::at(1, 1)));
        assert_eq!(Square::at(7, 7).offset(0, 1), None);
    }

    #[test]
    fn move_delta_is_signed() {
        let mv = ChessMove::new(Square::at(6, 4), Square::at(4, 4));
        assert_eq!(mv.delta(), (-2, 0));
    }

    #[test]
    fn promotion_letters_map_to_targets() {
        assert_eq!(PieceKind::from_promotion_letter('N'), Some(PieceKind::Knight));
        assert_eq!(PieceKind::from_promotion_letter('k'), None);
        assert!(!PieceKind::King.is_promotion_target());
        assert!(!PieceKind::Pawn.is_promotion_target());
    }
}

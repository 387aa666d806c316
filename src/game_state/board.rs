//! 8x8 mailbox board.
//!
//! `Board` is an owned grid of optional pieces. It only knows placement; all
//! rule knowledge lives in the move validator.

use crate::game_state::chess_rules::{back_rank_row, pawn_start_row, BACK_RANK, BOARD_SIZE};
use crate::game_state::chess_types::*;

pub type Grid = [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Default for Board {
    fn default() -> Self {
        Self::new_empty()
    }
}

impl Board {
    #[inline]
    pub const fn new_empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.initialize_standard_setup();
        board
    }

    /// Place both armies in the standard arrangement and clear rows 2..=5.
    pub fn initialize_standard_setup(&mut self) {
        for color in [Color::White, Color::Black] {
            let back = back_rank_row(color);
            let pawns = pawn_start_row(color);
            for (col, kind) in BACK_RANK.iter().enumerate() {
                self.cells[back][col] = Some(Piece::new(color, *kind));
                self.cells[pawns][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }

        for row in self.cells.iter_mut().take(6).skip(2) {
            *row = [None; BOARD_SIZE];
        }
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.cells[square.row()][square.col()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.cells[square.row()][square.col()] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Copy of the grid for rendering.
    #[inline]
    pub fn snapshot(&self) -> Grid {
        self.cells
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        (0..BOARD_SIZE * BOARD_SIZE).filter_map(move |index| {
            let square = Square::from_index(index);
            self.get(square).map(|piece| (square, piece))
        })
    }

    pub fn find(&self, wanted: Piece) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| *piece == wanted)
            .map(|(square, _)| square)
    }

    pub fn count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, piece)| piece.color == color).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_setup_places_thirty_two_pieces() {
        let board = Board::new_game();
        assert_eq!(board.count(Color::White), 16);
        assert_eq!(board.count(Color::Black), 16);
        assert_eq!(
            board.get(Square::at(7, 4)),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(
            board.get(Square::at(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        for row in 2..6 {
            for col in 0..BOARD_SIZE {
                assert!(board.is_empty(Square::at(row, col)));
            }
        }
    }

    #[test]
    fn setup_clears_middle_rows_of_a_used_board() {
        let mut board = Board::new_empty();
        board.set(Square::at(4, 4), Some(Piece::new(Color::Black, PieceKind::Queen)));
        board.initialize_standard_setup();
        assert!(board.is_empty(Square::at(4, 4)));
    }

    #[test]
    fn find_locates_kings() {
        let board = Board::new_game();
        assert_eq!(
            board.find(Piece::new(Color::Black, PieceKind::King)),
            Some(Square::at(0, 4))
        );
    }
}

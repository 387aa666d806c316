//! Square-name conversions.
//!
//! Converts between `(row, col)` squares and names such as `e4`, where
//! `file = 'a' + col` and `rank = 8 - row`.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::Square;

impl Square {
    /// Algebraic name of the square (for example: "e4").
    pub fn name(self) -> String {
        let file_char = char::from(b'a' + self.col() as u8);
        let rank = BOARD_SIZE - self.row();
        format!("{file_char}{rank}")
    }

    /// Parse an algebraic name (for example: "e4").
    pub fn from_algebraic(square: &str) -> ChessResult<Self> {
        algebraic_to_square(square)
    }
}

#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(square.to_owned()));
    }

    let col = usize::from(file - b'a');
    let row = BOARD_SIZE - usize::from(rank - b'0');
    Square::new(row, col)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_and_centre_names() {
        assert_eq!(Square::at(0, 0).name(), "a8");
        assert_eq!(Square::at(7, 7).name(), "h1");
        assert_eq!(Square::at(4, 4).name(), "e4");
        assert_eq!(Square::at(6, 4).to_string(), "e2");
    }

    #[test]
    fn parses_names_back_to_coordinates() {
        assert_eq!(algebraic_to_square("e2").expect("e2 should parse"), Square::at(6, 4));
        assert_eq!(Square::from_algebraic("A8").expect("A8 should parse"), Square::at(0, 0));
        assert_eq!(algebraic_to_square("h1").expect("h1 should parse"), Square::at(7, 7));
    }

    #[test]
    fn rejects_malformed_names() {
        for bad in ["", "e", "e9", "i1", "e10", "4e"] {
            assert_eq!(
                algebraic_to_square(bad),
                Err(ChessError::InvalidAlgebraicSquare(bad.to_owned()))
            );
        }
    }
}

//! Exhaustive move enumeration.
//!
//! Pairs every square holding a piece of the requested color with every one
//! of the 64 destinations and keeps the pairs the validator accepts. The
//! sequence is lazy and finite; cloning it (or calling `all_valid_moves`
//! again) restarts it from the beginning.
//!
//! Order is row-major over origins, then row-major over destinations.
//! Computer strategies pick by index, so this order is part of the contract.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::BOARD_SIZE;
use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_checks::is_valid_move;

const SQUARE_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

#[derive(Debug, Clone)]
pub struct ValidMoves<'a> {
    board: &'a Board,
    color: Color,
    from_index: usize,
    to_index: usize,
}

impl<'a> ValidMoves<'a> {
    fn new(board: &'a Board, color: Color) -> Self {
        Self {
            board,
            color,
            from_index: 0,
            to_index: 0,
        }
    }

    fn owns(&self, square: Square) -> bool {
        matches!(self.board.get(square), Some(piece) if piece.color == self.color)
    }
}

impl Iterator for ValidMoves<'_> {
    type Item = ChessMove;

    fn next(&mut self) -> Option<Self::Item> {
        while self.from_index < SQUARE_COUNT {
            let from = Square::from_index(self.from_index);
            if self.owns(from) {
                while self.to_index < SQUARE_COUNT {
                    let to = Square::from_index(self.to_index);
                    self.to_index += 1;
                    if is_valid_move(self.board, from, to) {
                        return Some(ChessMove::new(from, to));
                    }
                }
            }
            self.from_index += 1;
            self.to_index = 0;
        }
        None
    }
}

impl std::iter::FusedIterator for ValidMoves<'_> {}

pub fn all_valid_moves(board: &Board, color: Color) -> ValidMoves<'_> {
    ValidMoves::new(board, color)
}

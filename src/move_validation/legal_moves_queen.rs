use crate::game_state::board::Board;
use crate::game_state::chess_types::ChessMove;
use crate::move_validation::legal_moves_bishop::is_valid_bishop_move;
use crate::move_validation::legal_moves_rook::is_valid_rook_move;

/// Queens combine the rook and bishop rules.
pub fn is_valid_queen_move(board: &Board, mv: ChessMove) -> bool {
    is_valid_bishop_move(board, mv) || is_valid_rook_move(board, mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn covers_lines_and_diagonals_but_not_jumps() {
        let mut board = Board::new_empty();
        let d4 = Square::at(4, 3);
        board.set(d4, Some(Piece::new(Color::White, PieceKind::Queen)));
        assert!(is_valid_queen_move(&board, ChessMove::new(d4, Square::at(0, 3))));
        assert!(is_valid_queen_move(&board, ChessMove::new(d4, Square::at(0, 7))));
        assert!(is_valid_queen_move(&board, ChessMove::new(d4, Square::at(4, 0))));
        assert!(!is_valid_queen_move(&board, ChessMove::new(d4, Square::at(2, 4))));
    }
}

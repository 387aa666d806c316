use crate::game_state::board::Board;
use crate::game_state::chess_types::ChessMove;
use crate::move_validation::legal_move_shared::is_diagonal_path_clear;

pub fn is_valid_bishop_move(board: &Board, mv: ChessMove) -> bool {
    let (d_row, d_col) = mv.delta();
    d_row != 0 && d_row.abs() == d_col.abs() && is_diagonal_path_clear(board, mv.from, mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn slides_until_blocked() {
        let mut board = Board::new_empty();
        let c1 = Square::at(7, 2);
        board.set(c1, Some(Piece::new(Color::White, PieceKind::Bishop)));
        assert!(is_valid_bishop_move(&board, ChessMove::new(c1, Square::at(2, 7))));
        board.set(Square::at(5, 4), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert!(is_valid_bishop_move(&board, ChessMove::new(c1, Square::at(5, 4))));
        assert!(!is_valid_bishop_move(&board, ChessMove::new(c1, Square::at(4, 5))));
    }

    #[test]
    fn straight_moves_are_rejected() {
        let board = Board::new_empty();
        assert!(!is_valid_bishop_move(&board, ChessMove::new(Square::at(7, 2), Square::at(4, 2))));
    }
}

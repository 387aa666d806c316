use crate::game_state::board::Board;
use crate::game_state::chess_types::ChessMove;
use crate::move_validation::legal_move_shared::is_straight_path_clear;

pub fn is_valid_rook_move(board: &Board, mv: ChessMove) -> bool {
    let (d_row, d_col) = mv.delta();
    ((d_row == 0) ^ (d_col == 0)) && is_straight_path_clear(board, mv.from, mv.to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn slides_along_ranks_and_files() {
        let mut board = Board::new_empty();
        let a1 = Square::at(7, 0);
        board.set(a1, Some(Piece::new(Color::White, PieceKind::Rook)));
        assert!(is_valid_rook_move(&board, ChessMove::new(a1, Square::at(0, 0))));
        assert!(is_valid_rook_move(&board, ChessMove::new(a1, Square::at(7, 7))));
        assert!(!is_valid_rook_move(&board, ChessMove::new(a1, Square::at(6, 1))));
    }

    #[test]
    fn blocked_by_own_army_at_setup() {
        let board = Board::new_game();
        assert!(!is_valid_rook_move(&board, ChessMove::new(Square::at(7, 0), Square::at(5, 0))));
    }

    #[test]
    fn null_move_is_rejected() {
        let board = Board::new_empty();
        let a1 = Square::at(7, 0);
        assert!(!is_valid_rook_move(&board, ChessMove::new(a1, a1)));
    }
}

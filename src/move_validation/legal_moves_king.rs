use crate::game_state::chess_types::ChessMove;

/// One step in any direction. Squares attacked by the opponent are not excluded.
pub fn is_valid_king_move(mv: ChessMove) -> bool {
    let (d_row, d_col) = mv.delta();
    d_row.abs() <= 1 && d_col.abs() <= 1
}

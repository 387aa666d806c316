use crate::game_state::chess_types::ChessMove;

/// Knights jump in an L and ignore anything in between.
pub fn is_valid_knight_move(mv: ChessMove) -> bool {
    let (d_row, d_col) = mv.delta();
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

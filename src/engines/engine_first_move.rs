//! Hard difficulty: the first move in generation order.
//!
//! A fixed-index pick, not a search. Replace with a searching strategy to
//! make Hard live up to its name.

use crate::engines::engine_trait::ComputerStrategy;
use crate::game_state::chess_types::ChessMove;

#[derive(Debug, Clone, Copy, Default)]
pub struct FirstMoveStrategy;

impl ComputerStrategy for FirstMoveStrategy {
    fn name(&self) -> &str {
        "first-available"
    }

    fn choose_move(&mut self, moves: &[ChessMove]) -> Option<ChessMove> {
        moves.first().copied()
    }
}

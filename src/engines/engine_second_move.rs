//! Intermediate difficulty: the second move in generation order, or the only one.

use crate::engines::engine_trait::ComputerStrategy;
use crate::game_state::chess_types::ChessMove;

#[derive(Debug, Clone, Copy, Default)]
pub struct SecondMoveStrategy;

impl ComputerStrategy for SecondMoveStrategy {
    fn name(&self) -> &str {
        "second-available"
    }

    fn choose_move(&mut self, moves: &[ChessMove]) -> Option<ChessMove> {
        moves.get(1).or_else(|| moves.first()).copied()
    }
}

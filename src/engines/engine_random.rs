//! Easy difficulty: uniform choice over every candidate move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::ComputerStrategy;
use crate::game_state::chess_types::ChessMove;

pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for replays and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputerStrategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose_move(&mut self, moves: &[ChessMove]) -> Option<ChessMove> {
        moves.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::Color;
    use crate::move_generation::move_generator::all_valid_moves;

    #[test]
    fn picks_from_the_candidate_list() {
        let board = Board::new_game();
        let moves: Vec<_> = all_valid_moves(&board, Color::Black).collect();
        let mut strategy = RandomStrategy::from_seed(7);
        for _ in 0..50 {
            let picked = strategy.choose_move(&moves).expect("non-empty list");
            assert!(moves.contains(&picked));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let board = Board::new_game();
        let moves: Vec<_> = all_valid_moves(&board, Color::White).collect();
        let mut a = RandomStrategy::from_seed(42);
        let mut b = RandomStrategy::from_seed(42);
        for _ in 0..10 {
            assert_eq!(a.choose_move(&moves), b.choose_move(&moves));
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        assert_eq!(RandomStrategy::from_seed(1).choose_move(&[]), None);
    }
}

//! Computer move-selection abstraction.
//!
//! The game engine generates the candidate list and applies the result; a
//! strategy only chooses. Difficulty levels map to strategies at runtime so
//! a search-based strategy can be slotted in without touching the engine.

use std::fmt;
use std::str::FromStr;

use crate::engines::engine_first_move::FirstMoveStrategy;
use crate::engines::engine_random::RandomStrategy;
use crate::engines::engine_second_move::SecondMoveStrategy;
use crate::errors::ChessError;
use crate::game_state::chess_types::ChessMove;

pub trait ComputerStrategy: Send {
    fn name(&self) -> &str;

    /// Choose one of `moves`, which are in generation order.
    ///
    /// Returns `None` only when `moves` is empty.
    fn choose_move(&mut self, moves: &[ChessMove]) -> Option<ChessMove>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Difficulty {
    #[default]
    Easy,
    Intermediate,
    Hard,
}

impl Difficulty {
    pub const fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn strategy(self) -> Box<dyn ComputerStrategy> {
        match self {
            Difficulty::Easy => Box::new(RandomStrategy::new()),
            Difficulty::Intermediate => Box::new(SecondMoveStrategy),
            Difficulty::Hard => Box::new(FirstMoveStrategy),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "intermediate" => Ok(Difficulty::Intermediate),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ChessError::UnknownDifficulty(s.to_owned())),
        }
    }
}

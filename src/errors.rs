//! Crate error type.
//!
//! Rejected game interactions are not errors; they are reported through
//! interaction outcomes and the status line. `ChessError` covers malformed
//! input at the edges: square names, coordinates, difficulty names, clock
//! settings and terminal commands.

/// Errors raised while parsing or configuring a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// Square name that is not a file `a`-`h` followed by a rank `1`-`8`.
    #[error("invalid algebraic square: {0}")]
    InvalidAlgebraicSquare(String),

    #[error("coordinate out of range: ({row}, {col})")]
    CoordinateOutOfRange { row: usize, col: usize },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),

    /// Clock durations must be a positive whole number of seconds.
    #[error("invalid clock setting: {0}")]
    InvalidClockSetting(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

pub type ChessResult<T> = Result<T, ChessError>;

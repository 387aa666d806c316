//! Crate root module declarations for the grid chess rules engine.
//!
//! This file exposes the board model, move validation and generation, the
//! computer strategies, the game engine with its clock and promotion hooks,
//! and utility helpers so binaries, tests, and front ends can import stable
//! module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
}

pub mod move_validation {
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod move_generation {
    pub mod move_generator;
}

pub mod engines {
    pub mod engine_first_move;
    pub mod engine_random;
    pub mod engine_second_move;
    pub mod engine_trait;
}

pub mod game {
    pub mod clock;
    pub mod config;
    pub mod game_engine;
    pub mod promotion;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_board;
}

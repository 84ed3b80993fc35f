//! Crate root module declarations for the Nibble Chess engine.
//!
//! This file exposes all subsystems (board model, legality and move
//! execution, notation decoding, search, background engines, and the
//! front-end facade) so front ends, tests, and benches can import stable
//! module paths.

pub mod board_controller;
pub mod board_location;
pub mod chess_errors;
pub mod chess_move;
pub mod piece_types;

pub mod game_state {
    pub mod board_state;
    pub mod castle_rights;
    pub mod chess_rules;
    pub mod packed_board;
}

pub mod move_generation {
    pub mod check_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod search_statistics;
}

pub mod engines {
    pub mod chess_engine_thread_trait;
    pub mod engine_config;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_worker;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
    pub mod short_algebraic;
}

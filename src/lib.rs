//! Crate root module declarations for the Plum Quoridor engine project.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! search, engines, configuration and utility helpers) so binaries, tests,
//! and external tooling can import stable module paths.

pub mod config;
pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod game_events;
    pub mod game_state;
    pub mod path_finding;
    pub mod quoridor_rules;
    pub mod quoridor_types;
    pub mod snapshot;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_moves_pawn;
    pub mod legal_moves_wall;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod move_ordering;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_iterative;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
    pub mod game_record;
    pub mod notation;
    pub mod render_game_state;
}

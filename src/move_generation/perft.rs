//! Move-path enumeration for validating generators and timing them.
//!
//! Won positions are leaves: the game stops there even if moves remain.

use crate::errors::{QuoridorError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub pawn_moves: usize,
    pub wall_moves: usize,
    pub wins: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.pawn_moves += rhs.pawn_moves;
        self.wall_moves += rhs.wall_moves;
        self.wins += rhs.wins;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> QuoridorResult<PerftCounts> {
    let mut scratch = game_state.clone();
    scratch.events.clear();
    perft_recurse(&mut scratch, depth)
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> QuoridorResult<PerftCounts> {
    if depth == 0 || game_state.winner().is_some() {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in game_state.legal_moves() {
        let before = game_state.snapshot();
        game_state.apply_with_history(mv, false).map_err(|e| {
            QuoridorError::SearchInvariant(format!("generated move {mv} failed to apply: {e}"))
        })?;

        if depth == 1 {
            match mv {
                Move::Pawn(_) => total.pawn_moves += 1,
                Move::Wall(_) => total.wall_moves += 1,
            }
            if game_state.winner().is_some() {
                total.wins += 1;
            }
        }
        let child = perft_recurse(game_state, depth - 1)?;
        total.merge(child);
        game_state.restore(&before);
    }
    Ok(total)
}

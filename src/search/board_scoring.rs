//! Pluggable static evaluation for the search.

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Player;

/// Score assigned to a decided game, from the winner's point of view.
pub const WIN_SCORE: f64 = 1e6;

pub trait BoardScorer: Send + Sync {
    /// Score from `perspective`; larger is better for that player.
    fn score(&self, game_state: &GameState, perspective: Player) -> f64;
}

/// Shortest-path race plus a small bonus per spare wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathRaceScorer;

impl BoardScorer for PathRaceScorer {
    #[inline]
    fn score(&self, game_state: &GameState, perspective: Player) -> f64 {
        game_state.evaluate(perspective)
    }
}

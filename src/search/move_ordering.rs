//! Root and interior move ordering.
//!
//! Every legal move is played on the working state, scored by the resulting
//! path race, and rolled back. Pawn moves additionally get a bonus for
//! following the mover's shortest path and penalties for stepping back onto
//! cells the mover recently started a turn from. Ordering only affects pruning
//! efficiency and tie-breaks, never legality.

use std::cmp::Ordering;

use crate::errors::{QuoridorError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::{Cell, Move, Player};
use crate::game_state::snapshot::Snapshot;

pub const SHORTEST_PATH_BONUS: f64 = 2.0;
pub const BACKTRACK_PENALTY: f64 = 1.5;
pub const RECENT_CELL_PENALTY: f64 = 0.7;
pub const RECENT_CELL_WINDOW: usize = 6;

#[derive(Debug, Clone, Copy)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

/// Cells the mover started its recent turns from, newest first.
fn recent_turn_starts(trail: &[Snapshot], mover: Player) -> Vec<Cell> {
    trail
        .iter()
        .rev()
        .filter(|s| s.side_to_move == mover)
        .take(RECENT_CELL_WINDOW)
        .map(|s| s.pawn(mover))
        .collect()
}

/// Where the mover stood at the start of its previous turn, two plies back.
fn previous_turn_start(trail: &[Snapshot], mover: Player) -> Option<Cell> {
    let snapshot = trail.len().checked_sub(2).map(|i| &trail[i])?;
    (snapshot.side_to_move == mover).then(|| snapshot.pawn(mover))
}

/// Score all legal moves of `game_state` and return them best first.
///
/// `trail` is the sequence of pre-move snapshots leading to this position
/// (game history followed by the moves made inside the search).
pub fn score_moves(
    game_state: &mut GameState,
    trail: &[Snapshot],
) -> QuoridorResult<Vec<ScoredMove>> {
    let mover = game_state.side_to_move();
    let opponent = mover.opposite();
    let shortest_step = game_state.next_step_to_goal(mover).and_then(|s| s.next);
    let backtrack = previous_turn_start(trail, mover);
    let recent = recent_turn_starts(trail, mover);

    let moves = game_state.legal_moves();
    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let before = game_state.snapshot();
        game_state.apply_with_history(mv, false).map_err(|e| {
            QuoridorError::SearchInvariant(format!("ordering failed to apply {mv}: {e}"))
        })?;
        let own = game_state.distance_to_goal(mover);
        let opp = game_state.distance_to_goal(opponent);
        game_state.restore(&before);

        let mut score = match (own, opp) {
            (Some(own), Some(opp)) => f64::from(opp) - f64::from(own),
            _ => f64::NEG_INFINITY,
        };
        if let Move::Pawn(dest) = mv {
            if shortest_step == Some(dest) {
                score += SHORTEST_PATH_BONUS;
            }
            if backtrack == Some(dest) {
                score -= BACKTRACK_PENALTY;
            }
            if recent.contains(&dest) {
                score -= RECENT_CELL_PENALTY;
            }
        }
        scored.push(ScoredMove { mv, score });
    }

    // Stable sort keeps generation order among equal scores.
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    Ok(scored)
}

pub fn order_moves(game_state: &mut GameState, trail: &[Snapshot]) -> QuoridorResult<Vec<Move>> {
    Ok(score_moves(game_state, trail)?
        .into_iter()
        .map(|s| s.mv)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_step_leads_the_opening() {
        let mut game = GameState::new_game();
        let scored = score_moves(&mut game, &[]).expect("ordering should run");

        assert_eq!(scored.len(), 131);
        assert_eq!(scored[0].mv, Move::pawn(1, 4));
        // 8 - 7 + 2.0
        assert_eq!(scored[0].score, 3.0);
        assert_eq!(game.snapshot(), GameState::new_game().snapshot());
    }

    #[test]
    fn stepping_back_is_penalised() {
        let mut game = GameState::new_game();
        game.apply(Move::pawn(0, 5)).expect("legal");
        game.apply(Move::pawn(7, 4)).expect("legal");

        let history = game.history().to_vec();
        let scored = score_moves(&mut game, &history).expect("ordering should run");
        let back = scored
            .iter()
            .find(|s| s.mv == Move::pawn(0, 4))
            .expect("stepping back is legal");
        // Distances after the step: own 8, opp 7 -> -1, then -1.5 and -0.7.
        assert!((back.score - (-1.0 - 1.5 - 0.7)).abs() < 1e-9);

        let forward = scored
            .iter()
            .find(|s| s.mv == Move::pawn(1, 5))
            .expect("forward is legal");
        assert!((forward.score - (7.0 - 7.0 + 2.0)).abs() < 1e-9);
        assert!(
            scored.iter().position(|s| s.mv == Move::pawn(1, 5))
                < scored.iter().position(|s| s.mv == Move::pawn(0, 4))
        );
    }

    #[test]
    fn previous_turn_start_reads_two_plies_back() {
        let mut game = GameState::new_game();
        game.apply(Move::pawn(1, 4)).expect("legal");
        game.apply(Move::pawn(7, 4)).expect("legal");
        assert_eq!(
            previous_turn_start(game.history(), Player::North),
            Some(Cell::new(0, 4))
        );
        assert_eq!(previous_turn_start(game.history(), Player::South), None);
        assert_eq!(
            recent_turn_starts(game.history(), Player::South),
            vec![Cell::new(8, 4)]
        );
    }
}

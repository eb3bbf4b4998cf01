//! Iterative deepening search with negamax alpha-beta pruning.
//!
//! The search runs on a private clone of the caller's state. Moves are played
//! with `apply_with_history(.., false)` and rolled back from a snapshot, so
//! the caller's undo log is never touched. The pre-move snapshots of the
//! current line are kept on a trail seeded from the real game history; move
//! ordering reads it to discourage backtracking.
//!
//! The deadline is only checked between completed depths, so depth 1 always
//! runs and a search can overrun its budget by the cost of one extra
//! iteration.

use std::time::{Duration, Instant};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{QuoridorError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Move;
use crate::game_state::snapshot::Snapshot;
use crate::search::board_scoring::{BoardScorer, PathRaceScorer, WIN_SCORE};
use crate::search::move_ordering::order_moves;

/// Value of revisiting a position on the current line, per remaining ply.
pub const REPETITION_PENALTY_PER_DEPTH: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_limit_ms: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            time_limit_ms: Some(2_000),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: f64,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    /// The move came from the wall-less shortest-path shortcut.
    pub fast_path: bool,
}

struct SearchContext<'a, S: BoardScorer> {
    scorer: &'a S,
    trail: Vec<Snapshot>,
    path: Vec<u64>,
    nodes: u64,
}

/// Pick a move for the side to move within `time_limit_ms` (plus one ply).
pub fn search_with_time(
    game_state: &GameState,
    max_depth: u8,
    time_limit_ms: u64,
) -> QuoridorResult<Move> {
    let config = SearchConfig {
        max_depth,
        time_limit_ms: Some(time_limit_ms),
    };
    iterative_deepening_search(game_state, &PathRaceScorer, config)?
        .best_move
        .ok_or(QuoridorError::NoLegalMoves)
}

pub fn iterative_deepening_search<S: BoardScorer>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> QuoridorResult<SearchResult> {
    let started_at = Instant::now();
    let budget = config.time_limit_ms.map(Duration::from_millis);

    let mut root = game_state.clone();
    root.events.clear();
    let trail = std::mem::take(&mut root.history);

    let legal = root.legal_moves();
    let Some(&first_legal) = legal.first() else {
        return Err(QuoridorError::NoLegalMoves);
    };

    let mover = root.side_to_move();
    if root.walls_left(mover) == 0 {
        if let Some(step) = root.next_step_to_goal(mover).and_then(|s| s.next) {
            if legal.contains(&Move::Pawn(step)) {
                debug!("fast path: {mover:?} has no walls, stepping to {step}");
                return Ok(SearchResult {
                    best_move: Some(Move::Pawn(step)),
                    best_score: scorer.score(&root, mover),
                    reached_depth: 0,
                    nodes: 1,
                    elapsed_ms: started_at.elapsed().as_millis() as u64,
                    fast_path: true,
                });
            }
        }
    }

    let mut ctx = SearchContext {
        scorer,
        trail,
        path: Vec::new(),
        nodes: 0,
    };
    let mut result = SearchResult::default();

    for depth in 1..=config.max_depth {
        if depth > 1 && budget.is_some_and(|limit| started_at.elapsed() > limit) {
            debug!("time budget spent before depth {depth}");
            break;
        }

        let (score, best_move) = negamax(
            &mut ctx,
            &mut root,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
        )?;

        if let Some(mv) = best_move {
            result.best_move = Some(mv);
            result.best_score = score;
            result.reached_depth = depth;
        }
        debug!(
            "depth {depth} best {} score {score:.3} nodes {} elapsed {}ms",
            best_move.map_or_else(|| "-".to_owned(), |m| m.to_string()),
            ctx.nodes,
            started_at.elapsed().as_millis()
        );
    }

    if result.best_move.is_none() {
        result.best_move = Some(first_legal);
    }
    result.nodes = ctx.nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    Ok(result)
}

fn negamax<S: BoardScorer>(
    ctx: &mut SearchContext<'_, S>,
    game_state: &mut GameState,
    depth: u8,
    mut alpha: f64,
    beta: f64,
) -> QuoridorResult<(f64, Option<Move>)> {
    ctx.nodes += 1;

    let key = game_state.position_key();
    if ctx.path.contains(&key) {
        return Ok((-REPETITION_PENALTY_PER_DEPTH * f64::from(depth), None));
    }

    let mover = game_state.side_to_move();
    if let Some(winner) = game_state.winner() {
        let score = if winner == mover { WIN_SCORE } else { -WIN_SCORE };
        return Ok((score, None));
    }
    if depth == 0 {
        return Ok((ctx.scorer.score(game_state, mover), None));
    }

    let moves = order_moves(game_state, &ctx.trail)?;
    if moves.is_empty() {
        return Ok((ctx.scorer.score(game_state, mover), None));
    }

    ctx.path.push(key);
    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for mv in moves {
        let before = game_state.snapshot();
        game_state.apply_with_history(mv, false).map_err(|e| {
            QuoridorError::SearchInvariant(format!("search failed to apply {mv}: {e}"))
        })?;
        ctx.trail.push(before);

        let child = negamax(ctx, game_state, depth - 1, -beta, -alpha);

        if let Some(before) = ctx.trail.pop() {
            game_state.restore(&before);
        }
        let score = -child?.0;

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        if best_score > alpha {
            alpha = best_score;
        }
        if alpha >= beta {
            break;
        }
    }

    ctx.path.pop();
    Ok((best_score, best_move))
}

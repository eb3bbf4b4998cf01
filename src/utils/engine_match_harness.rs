//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other with an optional
//! seeded random opening of pawn steps, then aggregates series statistics.

use std::time::Instant;

use log::{debug, info, trace};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::errors::{NotationError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_rules::{DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER};
use crate::game_state::quoridor_types::{Move, Player};
use crate::utils::game_record::write_record;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    NorthWin,
    SouthWin,
    DrawNoLegalMoves,
    DrawMaxPlies,
}

impl MatchOutcome {
    pub fn result_token(self) -> &'static str {
        match self {
            MatchOutcome::NorthWin => "1-0",
            MatchOutcome::SouthWin => "0-1",
            MatchOutcome::DrawNoLegalMoves | MatchOutcome::DrawMaxPlies => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Player },
    DrawNoLegalMoves,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub board_size: u8,
    pub walls_per_player: u8,
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            walls_per_player: DEFAULT_WALLS_PER_PLAYER,
            max_plies: 200,
            opening_min_plies: 2,
            opening_max_plies: 6,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub initial_state: GameState,
    pub final_state: GameState,
    pub opening_moves: Vec<Move>,
    pub played_moves: Vec<Move>,
    pub north_move_count: u32,
    pub south_move_count: u32,
    pub north_total_time_ns: u128,
    pub south_total_time_ns: u128,
}

impl MatchResult {
    /// Text game record of the opening plus the engine moves.
    pub fn record(&self) -> Result<String, NotationError> {
        let moves: Vec<Move> = self
            .opening_moves
            .iter()
            .chain(self.played_moves.iter())
            .copied()
            .collect();
        write_record(&self.initial_state, &moves, self.outcome.result_token())
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single seeded engine-vs-engine match.
///
/// `engine_north` moves first.
pub fn play_engine_match(
    mut engine_north: Box<dyn Engine>,
    mut engine_south: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> QuoridorResult<MatchResult> {
    let start = GameState::with_rules(config.board_size, config.walls_per_player)?;
    play_match_internal(
        start,
        &mut engine_north,
        &mut engine_south,
        seed,
        config,
        true,
    )
}

/// Play a single match from a caller-provided state, without a random opening.
pub fn play_engine_match_from_state(
    mut engine_north: Box<dyn Engine>,
    mut engine_south: Box<dyn Engine>,
    start_state: GameState,
    seed: u64,
    config: MatchConfig,
) -> QuoridorResult<MatchResult> {
    play_match_internal(
        start_state,
        &mut engine_north,
        &mut engine_south,
        seed,
        config,
        false,
    )
}

fn play_match_internal(
    initial_state: GameState,
    engine_north: &mut Box<dyn Engine>,
    engine_south: &mut Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
    apply_random_opening: bool,
) -> QuoridorResult<MatchResult> {
    engine_north.new_game();
    engine_south.new_game();

    let mut state = initial_state.clone();
    let opening_moves = if apply_random_opening {
        apply_seeded_random_opening(
            &mut state,
            seed,
            config.opening_min_plies,
            config.opening_max_plies,
        )?
    } else {
        Vec::new()
    };

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        initial_state,
        final_state: GameState::default(),
        opening_moves,
        played_moves: Vec::new(),
        north_move_count: 0,
        south_move_count: 0,
        north_total_time_ns: 0,
        south_total_time_ns: 0,
    };

    let mut decided = None;
    for _ in 0..config.max_plies {
        if let Some(outcome) = decided_outcome(&state) {
            decided = Some(outcome);
            break;
        }
        if state.legal_moves().is_empty() {
            decided = Some(MatchOutcome::DrawNoLegalMoves);
            break;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Player::North => engine_north.choose_move(&state, &config.go_params)?,
            Player::South => engine_south.choose_move(&state, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Player::North => {
                result.north_move_count = result.north_move_count.saturating_add(1);
                result.north_total_time_ns = result.north_total_time_ns.saturating_add(elapsed_ns);
            }
            Player::South => {
                result.south_move_count = result.south_move_count.saturating_add(1);
                result.south_total_time_ns = result.south_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let Some(chosen) = out.best_move.or_else(|| state.legal_moves().first().copied()) else {
            decided = Some(MatchOutcome::DrawNoLegalMoves);
            break;
        };
        state.apply(chosen)?;
        for event in state.drain_events() {
            trace!("{event:?}");
        }
        result.played_moves.push(chosen);
    }

    result.outcome = decided
        .or_else(|| decided_outcome(&state))
        .unwrap_or(MatchOutcome::DrawMaxPlies);
    debug!(
        "match seed={seed} outcome={:?} plies={}",
        result.outcome,
        result.opening_moves.len() + result.played_moves.len()
    );
    result.final_state = state;
    Ok(result)
}

fn decided_outcome(state: &GameState) -> Option<MatchOutcome> {
    state.winner().map(|winner| match winner {
        Player::North => MatchOutcome::NorthWin,
        Player::South => MatchOutcome::SouthWin,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Sides are randomized each game (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> QuoridorResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut side_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_north = side_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        info!(
            "[series] game {}/{} seed={} north={}",
            i + 1,
            config.games,
            seed,
            if player1_is_north { "Player1" } else { "Player2" }
        );

        let result = if player1_is_north {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p2_moves, p1_ns, p2_ns) = if player1_is_north {
            (
                result.north_move_count,
                result.south_move_count,
                result.north_total_time_ns,
                result.south_total_time_ns,
            )
        } else {
            (
                result.south_move_count,
                result.north_move_count,
                result.south_total_time_ns,
                result.north_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let mapped = match result.outcome {
            MatchOutcome::NorthWin | MatchOutcome::SouthWin => {
                let side = if result.outcome == MatchOutcome::NorthWin {
                    Player::North
                } else {
                    Player::South
                };
                let player = if (side == Player::North) == player1_is_north {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            MatchOutcome::DrawNoLegalMoves => {
                stats.draws += 1;
                SeriesOutcome::DrawNoLegalMoves
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        info!(
            "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
            i + 1,
            config.games,
            mapped,
            stats.player1_wins,
            stats.player2_wins,
            stats.draws
        );
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / f64::from(moves) / 1_000_000.0
    }
}

/// Random pawn steps only, so openings never spend walls.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> QuoridorResult<Vec<Move>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<Move>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        if state.winner().is_some() {
            break;
        }
        let steps = state.legal_pawn_moves();
        if steps.is_empty() {
            break;
        }
        let chosen = Move::Pawn(steps[rng.random_range(0..steps.len())]);
        state.apply(chosen)?;
        opening_moves.push(chosen);
    }
    state.drain_events();

    Ok(opening_moves)
}

//! Property checks over seeded random playouts.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use plum_quoridor::game_state::game_state::GameState;
use plum_quoridor::game_state::quoridor_types::{Move, Player};
use std::time::{Duration, Instant};

use plum_quoridor::search::board_scoring::PathRaceScorer;
use plum_quoridor::search::iterative_deepening::{
    iterative_deepening_search, search_with_time, SearchConfig,
};
use plum_quoridor::utils::notation::parse_move;

/// Play up to `plies` random legal moves, calling `check` after each one.
fn random_playout<F>(size: u8, walls: u8, seed: u64, plies: usize, mut check: F) -> GameState
where
    F: FnMut(&GameState, Move),
{
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = GameState::with_rules(size, walls).expect("valid size");
    for _ in 0..plies {
        if game.winner().is_some() {
            break;
        }
        let moves = game.legal_moves();
        let Some(&mv) = moves.choose(&mut rng) else {
            break;
        };
        game.apply(mv).expect("generated moves are legal");
        check(&game, mv);
    }
    game
}

#[test]
fn both_players_stay_connected_and_walls_are_counted() {
    for seed in 0..6 {
        random_playout(7, 6, seed, 60, |game, _| {
            assert!(game.both_players_connected(), "seed {seed}");
            let placed = usize::from(game.wall_budget()) * 2
                - usize::from(game.walls_left(Player::North))
                - usize::from(game.walls_left(Player::South));
            assert_eq!(game.board().wall_count(), placed, "seed {seed}");
        });
    }
}

#[test]
fn bfs_and_astar_agree_on_distances() {
    for seed in 10..14 {
        random_playout(9, 10, seed, 40, |game, _| {
            for player in Player::ALL {
                let start = game.pawn(player);
                let goal = game.goal_rows(player);
                let bfs = game.board().bfs_dist_to_goal(start, &goal);
                let astar = game.board().astar_dist_to_goal(start, &goal);
                assert_eq!(bfs, astar, "seed {seed} player {player:?}");
            }
        });
    }
}

#[test]
fn undo_walks_back_through_every_snapshot() {
    let mut snapshots = vec![GameState::with_rules(7, 6).expect("valid size").snapshot()];
    let mut game = random_playout(7, 6, 99, 30, |game, _| snapshots.push(game.snapshot()));

    assert_eq!(game.history().len() + 1, snapshots.len());
    while let Some(expected) = snapshots.pop() {
        assert_eq!(game.snapshot(), expected);
        game.undo();
    }
    assert!(game.history().is_empty());
}

#[test]
fn every_played_move_survives_notation() {
    random_playout(9, 10, 5, 40, |game, mv| {
        let parsed = parse_move(&mv.to_string(), game.size()).expect("notation should parse");
        assert_eq!(parsed, mv);
    });
}

#[test]
fn snapshot_json_survives_a_playout() {
    let game = random_playout(7, 6, 21, 25, |_, _| {});
    let json = game.export_snapshot_json().expect("export");
    let restored = GameState::import_snapshot_json(&json).expect("import");
    assert_eq!(restored.snapshot(), game.snapshot());
    assert_eq!(restored.position_key(), game.position_key());
}

#[test]
fn search_returns_a_legal_move_mid_game() {
    for seed in 30..33 {
        let game = random_playout(5, 3, seed, 6, |_, _| {});
        if game.winner().is_some() {
            continue;
        }
        let before = game.snapshot();
        let mv = search_with_time(&game, 2, 5_000).expect("search should run");
        assert!(game.legal_moves().contains(&mv), "seed {seed}: {mv}");
        assert_eq!(game.snapshot(), before);
    }
}

#[test]
fn search_overruns_its_budget_by_at_most_one_depth() {
    let game = GameState::new_game();

    // Cost of completing depths 1 and 2 on this machine and build profile.
    let started = Instant::now();
    let full = iterative_deepening_search(
        &game,
        &PathRaceScorer,
        SearchConfig {
            max_depth: 2,
            time_limit_ms: None,
        },
    )
    .expect("search should run");
    let two_depths = started.elapsed();
    assert_eq!(full.reached_depth, 2);

    let budget_ms = 1;
    let max_depth = 8;
    let started = Instant::now();
    let result = iterative_deepening_search(
        &game,
        &PathRaceScorer,
        SearchConfig {
            max_depth,
            time_limit_ms: Some(budget_ms),
        },
    )
    .expect("search should run");
    let elapsed = started.elapsed();

    assert!(result.reached_depth >= 1);
    assert!(result.reached_depth < max_depth);
    let margin = two_depths * 2 + Duration::from_millis(500);
    assert!(
        elapsed <= Duration::from_millis(budget_ms) + margin,
        "search took {elapsed:?}, budget {budget_ms}ms, margin {margin:?}"
    );

    let started = Instant::now();
    let mv = search_with_time(&game, max_depth, budget_ms).expect("search should run");
    assert!(started.elapsed() <= Duration::from_millis(budget_ms) + margin);
    assert!(game.legal_moves().contains(&mv));
}

//! Self-play demo.
//!
//! Run with:
//! `cargo run --release -- [path/to/config.toml]`
//!
//! Plays the iterative engine against itself, printing the board after every
//! ply and the game record at the end.

use std::error::Error;
use std::path::PathBuf;

use plum_quoridor::config::EngineConfig;
use plum_quoridor::engines::engine_iterative::IterativeEngine;
use plum_quoridor::engines::engine_trait::{Engine, GoParams};
use plum_quoridor::utils::game_record::{result_token, write_record};
use plum_quoridor::utils::render_game_state::render_game_state;

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("plum_quoridor.toml"));
    let config = EngineConfig::load_or_default(&config_path)?;

    let initial = config.new_game()?;
    let mut game = initial.clone();
    let mut engine = IterativeEngine::from_config(config.search);
    let params = GoParams::default();
    let mut moves = Vec::new();

    println!("{}\n", render_game_state(&game));
    for ply in 0..config.series.max_plies {
        if game.winner().is_some() {
            break;
        }
        let out = engine.choose_move(&game, &params)?;
        let Some(mv) = out.best_move else {
            println!("{:?} has no legal moves", game.side_to_move());
            break;
        };
        for line in &out.info_lines {
            println!("{line}");
        }
        println!("ply {} {:?} plays {mv}", ply + 1, game.side_to_move());
        game.apply(mv)?;
        for event in game.drain_events() {
            println!("event {event:?}");
        }
        moves.push(mv);
        println!("{}\n", render_game_state(&game));
    }

    print!("{}", write_record(&initial, &moves, result_token(&game))?);
    Ok(())
}

//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series -- [path/to/config.toml]`

use std::error::Error;
use std::path::PathBuf;

use plum_quoridor::config::EngineConfig;
use plum_quoridor::engines::engine_iterative::IterativeEngine;
use plum_quoridor::engines::engine_random::RandomEngine;
use plum_quoridor::engines::engine_trait::Engine;
use plum_quoridor::utils::engine_match_harness::play_engine_match_series;

fn main() -> Result<(), Box<dyn Error>> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("plum_quoridor.toml"));
    let config = EngineConfig::load_or_default(&config_path)?;
    let search = config.search;

    // Swap these factories to compare other engines or search settings.
    let player1 = move || Box::new(IterativeEngine::from_config(search)) as Box<dyn Engine>;
    let player2 = || Box::new(RandomEngine::new()) as Box<dyn Engine>;

    let stats = play_engine_match_series(player1, player2, config.match_series_config())?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}

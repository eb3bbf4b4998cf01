//! Iterative-deepening path-race engine.
//!
//! Wraps the negamax alpha-beta search with a configurable default depth and
//! per-move time budget. `GoParams` overrides both for a single call.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ConfigError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::PathRaceScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};

pub struct IterativeEngine {
    default_depth: u8,
    default_movetime_ms: Option<u64>,
    scorer: PathRaceScorer,
}

impl IterativeEngine {
    pub fn new(default_depth: u8, default_movetime_ms: Option<u64>) -> Self {
        Self {
            default_depth: default_depth.max(1),
            default_movetime_ms,
            scorer: PathRaceScorer,
        }
    }

    pub fn from_config(config: SearchConfig) -> Self {
        Self::new(config.max_depth, config.time_limit_ms)
    }
}

impl Default for IterativeEngine {
    fn default() -> Self {
        Self::from_config(SearchConfig::default())
    }
}

impl Engine for IterativeEngine {
    fn name(&self) -> &str {
        "PlumQuoridor Iterative"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ConfigError> {
        let parse = |v: &str| {
            v.trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::Validation(format!("invalid {name} value '{value}'")))
        };
        if name.eq_ignore_ascii_case("Depth") {
            let depth = parse(value)?;
            self.default_depth = u8::try_from(depth.clamp(1, u64::from(u8::MAX))).unwrap_or(u8::MAX);
            return Ok(());
        }
        if name.eq_ignore_ascii_case("MoveTime") {
            self.default_movetime_ms = Some(parse(value)?);
            return Ok(());
        }
        Err(ConfigError::Validation(format!("unknown option '{name}'")))
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> QuoridorResult<EngineOutput> {
        let depth = params.depth.unwrap_or(self.default_depth).max(1);
        let movetime_ms = params.movetime_ms.or(self.default_movetime_ms);

        let result = iterative_deepening_search(
            game_state,
            &self.scorer,
            SearchConfig {
                max_depth: depth,
                time_limit_ms: movetime_ms,
            },
        )?;

        let mut out = EngineOutput {
            best_move: result.best_move,
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score {:.2} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        out.info_lines
            .push(format!("info string iterative_engine used_depth {depth}"));
        out.info_lines
            .push(format!("info string iterative_engine movetime_ms {movetime_ms:?}"));
        if result.fast_path {
            out.info_lines
                .push("info string iterative_engine wall-less race shortcut".to_owned());
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::IterativeEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::game_state::GameState;

    #[test]
    fn iterative_engine_honors_go_depth_override() {
        let game = GameState::with_size(5).expect("valid size");
        let mut engine = IterativeEngine::new(4, Some(10_000));
        let params = GoParams {
            depth: Some(1),
            ..GoParams::default()
        };

        let out = engine
            .choose_move(&game, &params)
            .expect("engine should choose a move");
        let joined = out.info_lines.join("\n");

        assert!(joined.contains("info depth 1"), "expected depth-1 search info");
        assert!(joined.contains("used_depth 1"), "expected used_depth=1 info");
        let mv = out.best_move.expect("a move");
        assert!(game.legal_moves().contains(&mv));
    }

    #[test]
    fn options_are_validated() {
        let mut engine = IterativeEngine::default();
        engine.set_option("depth", "2").expect("valid depth");
        engine.set_option("MoveTime", "150").expect("valid movetime");
        assert!(engine.set_option("Depth", "deep").is_err());
        assert!(engine.set_option("Hash", "64").is_err());
    }
}

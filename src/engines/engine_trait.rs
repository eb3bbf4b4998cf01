//! Engine abstraction layer used by the demo binary and the match harness.
//!
//! Defines common input parameters and output payloads so different move
//! pickers can be swapped at runtime behind a single trait interface.

use crate::errors::{ConfigError, QuoridorResult};
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Move;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), ConfigError> {
        Ok(())
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> QuoridorResult<EngineOutput>;
}

//! Errors used throughout the Quoridor engine.
//!
//! `QuoridorError` is the canonical error for rule enforcement, state
//! construction and search. Parsing of the text notation and loading of
//! configuration have their own enums so callers can match on them separately.
//!
//! Usage guidelines:
//! - Rule violations (`IllegalMove`, `IllegalPlacement`, `NoWallsLeft`,
//!   `BlocksAllPaths`) are synchronous precondition failures. Presentation
//!   layers restrict input to the engine's legal sets and treat these as an
//!   aborted interaction.
//! - `SearchInvariant` means the search failed to apply a move it generated
//!   itself. It signals a bug, not caller misuse.

use std::path::PathBuf;

use crate::game_state::quoridor_types::{Cell, Player, Wall};

pub type QuoridorResult<T> = Result<T, QuoridorError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoridorError {
    /// Pawn destination is not in the mover's legal pawn set.
    #[error("illegal pawn move to {0}")]
    IllegalMove(Cell),

    /// Wall is out of range, duplicated, crossing or half-overlapping.
    #[error("illegal wall placement {0}")]
    IllegalPlacement(Wall),

    #[error("{0:?} has no walls left")]
    NoWallsLeft(Player),

    /// Wall would leave a player without any path to their goal row.
    #[error("wall {0} blocks every path to a goal row")]
    BlocksAllPaths(Wall),

    #[error("unsupported board size {0}")]
    InvalidBoardSize(u8),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// The side to move has neither a pawn move nor a wall move.
    #[error("no legal moves for the side to move")]
    NoLegalMoves,

    #[error("search invariant violated: {0}")]
    SearchInvariant(String),
}

/// Failures while reading cells, walls and moves in text notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("empty move token")]
    Empty,

    #[error("invalid column character '{0}'")]
    InvalidColumn(char),

    #[error("invalid row in '{0}'")]
    InvalidRow(String),

    #[error("invalid wall orientation '{0}'")]
    InvalidOrientation(char),

    #[error("'{token}' is outside a {size}x{size} board")]
    OutOfBounds { token: String, size: u8 },

    #[error("game record is malformed: {0}")]
    MalformedRecord(String),

    #[error("move '{token}' could not be replayed: {source}")]
    Replay {
        token: String,
        source: QuoridorError,
    },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

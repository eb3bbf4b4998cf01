//! Notifications for presentation layers (sound cues, animations, banners).
//!
//! The engine only queues events for recorded mutations; search exploration
//! never produces any. Consumers drain the queue after each interaction.

use serde::{Deserialize, Serialize};

use crate::game_state::quoridor_types::{Cell, Player, Wall};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PawnMoved { player: Player, from: Cell, to: Cell },
    WallPlaced { player: Player, wall: Wall },
    MoveUndone,
    GameWon { winner: Player },
}

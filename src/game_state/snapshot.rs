//! Deep copies of mutable game state used by undo, search rollback and
//! external save/replay.

use serde::{Deserialize, Serialize};

use crate::game_state::quoridor_types::{Cell, Player, Wall};

/// Everything needed to restore a `GameState` field for field.
///
/// Wall lists are kept in row-major anchor order so two snapshots of the same
/// position compare equal regardless of placement order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board_size: u8,
    pub pawns: [Cell; 2],
    pub horizontal_walls: Vec<Wall>,
    pub vertical_walls: Vec<Wall>,
    pub wall_owners: Vec<(Wall, Player)>,
    pub walls_left: [u8; 2],
    /// Walls each player started the game with.
    pub wall_budget: u8,
    pub side_to_move: Player,
}

impl Snapshot {
    #[inline]
    pub fn pawn(&self, player: Player) -> Cell {
        self.pawns[player.index()]
    }
}

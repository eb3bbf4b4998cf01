//! Core game state representation.
//!
//! `GameState` owns the board, both pawns, the wall counters, the side to move
//! and the undo history of deep snapshots. Move generation and move
//! application live in `move_generation`; this module covers construction,
//! queries, evaluation and snapshot import/export.

use std::collections::BTreeMap;

use crate::errors::{QuoridorError, QuoridorResult};
use crate::game_state::board::Board;
use crate::game_state::game_events::GameEvent;
use crate::game_state::path_finding::PathStep;
use crate::game_state::quoridor_rules::{
    DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::game_state::quoridor_types::{Cell, Orientation, Player, Wall};
use crate::game_state::snapshot::Snapshot;

/// Weight of one step of shortest-path advantage in `evaluate`.
pub const DISTANCE_WEIGHT: f64 = 10.0;
/// Weight of one spare wall in `evaluate`.
pub const WALL_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) pawns: [Cell; 2],
    pub(crate) walls_left: [u8; 2],
    pub(crate) side_to_move: Player,
    pub(crate) wall_budget: u8,
    pub(crate) history: Vec<Snapshot>,
    pub(crate) events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard 9x9 game with 10 walls per player.
    pub fn new_game() -> Self {
        Self::fresh(DEFAULT_BOARD_SIZE, DEFAULT_WALLS_PER_PLAYER)
    }

    pub fn with_size(size: u8) -> QuoridorResult<Self> {
        Self::with_rules(size, DEFAULT_WALLS_PER_PLAYER)
    }

    pub fn with_rules(size: u8, walls_per_player: u8) -> QuoridorResult<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(QuoridorError::InvalidBoardSize(size));
        }
        Ok(Self::fresh(size, walls_per_player))
    }

    fn fresh(size: u8, walls_per_player: u8) -> Self {
        let mid = size / 2;
        Self {
            board: Board::new(size),
            pawns: [Cell::new(0, mid), Cell::new(size - 1, mid)],
            walls_left: [walls_per_player; 2],
            side_to_move: Player::North,
            wall_budget: walls_per_player,
            history: Vec::new(),
            events: Vec::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.board.size()
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn pawn(&self, player: Player) -> Cell {
        self.pawns[player.index()]
    }

    #[inline]
    pub fn walls_left(&self, player: Player) -> u8 {
        self.walls_left[player.index()]
    }

    #[inline]
    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    #[inline]
    pub fn wall_budget(&self) -> u8 {
        self.wall_budget
    }

    #[inline]
    pub fn goal_rows(&self, player: Player) -> [u8; 1] {
        [player.goal_row(self.size())]
    }

    #[inline]
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Pending presentation events, oldest first.
    #[inline]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn winner(&self) -> Option<Player> {
        let n = self.size();
        if self.pawns[Player::North.index()].row == Player::North.goal_row(n) {
            return Some(Player::North);
        }
        if self.pawns[Player::South.index()].row == Player::South.goal_row(n) {
            return Some(Player::South);
        }
        None
    }

    /// Shortest wall-constrained distance from `player`'s pawn to its goal row.
    pub fn distance_to_goal(&self, player: Player) -> Option<u32> {
        self.board
            .bfs_dist_to_goal(self.pawn(player), &self.goal_rows(player))
    }

    pub fn next_step_to_goal(&self, player: Player) -> Option<PathStep> {
        self.board
            .bfs_next_step_to_goal(self.pawn(player), &self.goal_rows(player))
    }

    /// Both pawns can still reach their goal rows.
    pub fn both_players_connected(&self) -> bool {
        Player::ALL.iter().all(|p| {
            self.board
                .path_exists_for(self.pawn(*p), &self.goal_rows(*p))
        })
    }

    /// Static score from `perspective`: path race first, spare walls second.
    ///
    /// Returns 0 when either pawn is cut off, which legal play never produces.
    pub fn evaluate(&self, perspective: Player) -> f64 {
        let own = self.distance_to_goal(perspective);
        let opp = self.distance_to_goal(perspective.opposite());
        let (Some(own), Some(opp)) = (own, opp) else {
            return 0.0;
        };
        let wall_diff = f64::from(self.walls_left(perspective))
            - f64::from(self.walls_left(perspective.opposite()));
        DISTANCE_WEIGHT * (f64::from(opp) - f64::from(own)) + WALL_WEIGHT * wall_diff
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board_size: self.size(),
            pawns: self.pawns,
            horizontal_walls: self.board.walls(Orientation::Horizontal),
            vertical_walls: self.board.walls(Orientation::Vertical),
            wall_owners: self.board.owners().iter().map(|(w, p)| (*w, *p)).collect(),
            walls_left: self.walls_left,
            wall_budget: self.wall_budget,
            side_to_move: self.side_to_move,
        }
    }

    /// Restore a snapshot taken from a state of the same board size.
    ///
    /// History and pending events are left untouched; this is the rollback
    /// primitive used by `undo` and by search. Untrusted snapshots go through
    /// `from_snapshot` instead.
    pub(crate) fn restore(&mut self, snapshot: &Snapshot) {
        let owners: BTreeMap<Wall, Player> = snapshot.wall_owners.iter().copied().collect();
        let mut board = Board::new(snapshot.board_size);
        for wall in snapshot
            .horizontal_walls
            .iter()
            .chain(snapshot.vertical_walls.iter())
        {
            let placed = board.place_wall(*wall, owners.get(wall).copied());
            debug_assert!(placed.is_ok(), "snapshot wall {wall} failed to re-place");
        }
        self.board = board;
        self.pawns = snapshot.pawns;
        self.walls_left = snapshot.walls_left;
        self.side_to_move = snapshot.side_to_move;
    }

    /// Build a fresh game from an untrusted snapshot, checking every
    /// structural rule the engine otherwise guarantees by construction.
    pub fn from_snapshot(snapshot: &Snapshot) -> QuoridorResult<Self> {
        let size = snapshot.board_size;
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(QuoridorError::InvalidBoardSize(size));
        }
        let budget = snapshot.wall_budget;
        if snapshot.walls_left.iter().any(|left| *left > budget) {
            return Err(QuoridorError::InvalidSnapshot(format!(
                "walls left {:?} exceed the budget of {budget}",
                snapshot.walls_left
            )));
        }
        let mut state = Self::fresh(size, budget);

        for pawn in snapshot.pawns {
            if !state.board.in_bounds(pawn) {
                return Err(QuoridorError::InvalidSnapshot(format!(
                    "pawn {pawn} is off the board"
                )));
            }
        }
        if snapshot.pawns[0] == snapshot.pawns[1] {
            return Err(QuoridorError::InvalidSnapshot(
                "both pawns share a cell".to_owned(),
            ));
        }
        for (wall, expected) in snapshot
            .horizontal_walls
            .iter()
            .map(|w| (w, Orientation::Horizontal))
            .chain(
                snapshot
                    .vertical_walls
                    .iter()
                    .map(|w| (w, Orientation::Vertical)),
            )
        {
            if wall.orientation != expected {
                return Err(QuoridorError::InvalidSnapshot(format!(
                    "wall {wall} listed under the wrong orientation"
                )));
            }
            state
                .board
                .place_wall(*wall, None)
                .map_err(|e| QuoridorError::InvalidSnapshot(e.to_string()))?;
        }
        for (wall, owner) in &snapshot.wall_owners {
            if !state.board.contains_wall(*wall) {
                return Err(QuoridorError::InvalidSnapshot(format!(
                    "owner recorded for missing wall {wall}"
                )));
            }
            state.board.set_owner(*wall, *owner)?;
        }

        state.pawns = snapshot.pawns;
        state.walls_left = snapshot.walls_left;
        state.side_to_move = snapshot.side_to_move;
        if !state.both_players_connected() {
            return Err(QuoridorError::InvalidSnapshot(
                "a player has no path to their goal row".to_owned(),
            ));
        }
        Ok(state)
    }

    /// Convenience setup for analysis and tests: walls are attributed to no one
    /// and the budget is the larger of the counters and the standard 10.
    pub fn from_position(
        size: u8,
        pawns: [Cell; 2],
        walls: &[Wall],
        walls_left: [u8; 2],
        side_to_move: Player,
    ) -> QuoridorResult<Self> {
        let mut horizontal_walls: Vec<Wall> = walls
            .iter()
            .copied()
            .filter(|w| w.orientation == Orientation::Horizontal)
            .collect();
        let mut vertical_walls: Vec<Wall> = walls
            .iter()
            .copied()
            .filter(|w| w.orientation == Orientation::Vertical)
            .collect();
        horizontal_walls.sort();
        vertical_walls.sort();
        Self::from_snapshot(&Snapshot {
            board_size: size,
            pawns,
            horizontal_walls,
            vertical_walls,
            wall_owners: Vec::new(),
            walls_left,
            wall_budget: walls_left
                .iter()
                .copied()
                .max()
                .unwrap_or(0)
                .max(DEFAULT_WALLS_PER_PLAYER),
            side_to_move,
        })
    }

    pub fn export_snapshot_json(&self) -> QuoridorResult<String> {
        serde_json::to_string(&self.snapshot())
            .map_err(|e| QuoridorError::InvalidSnapshot(e.to_string()))
    }

    pub fn import_snapshot_json(json: &str) -> QuoridorResult<Self> {
        let snapshot: Snapshot = serde_json::from_str(json)
            .map_err(|e| QuoridorError::InvalidSnapshot(e.to_string()))?;
        Self::from_snapshot(&snapshot)
    }
}

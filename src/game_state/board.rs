//! Wall geometry and the movement graph of an `N x N` Quoridor board.
//!
//! Walls live on the lattice between cells and each covers two unit edges:
//! - a horizontal wall anchored at `(r, c)` blocks vertical steps between rows
//!   `r` and `r + 1` in columns `c` and `c + 1`;
//! - a vertical wall anchored at `(r, c)` blocks horizontal steps between
//!   columns `c` and `c + 1` in rows `r` and `r + 1`.
//!
//! Valid anchors satisfy `0 <= r, c <= N - 2`. Placed anchors are kept in two
//! dense occupancy grids for O(1) edge checks. Ownership is tracked in a
//! separate map and never consulted by legality or pathfinding.

use std::collections::BTreeMap;

use crate::errors::{QuoridorError, QuoridorResult};
use crate::game_state::quoridor_rules::DIRECTIONS;
use crate::game_state::quoridor_types::{Cell, Orientation, Player, Wall};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    horizontal: Vec<bool>,
    vertical: Vec<bool>,
    owners: BTreeMap<Wall, Player>,
}

impl Board {
    pub(crate) fn new(size: u8) -> Self {
        let anchors = usize::from(size.saturating_sub(1)).pow(2);
        Self {
            size,
            horizontal: vec![false; anchors],
            vertical: vec![false; anchors],
            owners: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    #[inline]
    fn anchor_in_range(&self, row: i16, col: i16) -> bool {
        let limit = i16::from(self.size) - 1;
        (0..limit).contains(&row) && (0..limit).contains(&col)
    }

    #[inline]
    fn anchor_index(&self, row: u8, col: u8) -> usize {
        usize::from(row) * usize::from(self.size - 1) + usize::from(col)
    }

    /// Whether an anchor is occupied; out-of-range anchors read as empty.
    fn has_anchor(&self, orientation: Orientation, row: i16, col: i16) -> bool {
        if !self.anchor_in_range(row, col) {
            return false;
        }
        let idx = self.anchor_index(row as u8, col as u8);
        match orientation {
            Orientation::Horizontal => self.horizontal[idx],
            Orientation::Vertical => self.vertical[idx],
        }
    }

    #[inline]
    pub fn contains_wall(&self, wall: Wall) -> bool {
        self.has_anchor(
            wall.orientation,
            i16::from(wall.anchor.row),
            i16::from(wall.anchor.col),
        )
    }

    /// Pure legality query: range, duplicate, crossing and half-overlap.
    pub fn wall_legal(&self, wall: Wall) -> bool {
        let row = i16::from(wall.anchor.row);
        let col = i16::from(wall.anchor.col);
        if !self.anchor_in_range(row, col) {
            return false;
        }
        if self.has_anchor(wall.orientation, row, col) {
            return false;
        }
        if self.has_anchor(wall.orientation.other(), row, col) {
            return false;
        }
        match wall.orientation {
            Orientation::Horizontal => {
                !self.has_anchor(Orientation::Horizontal, row, col - 1)
                    && !self.has_anchor(Orientation::Horizontal, row, col + 1)
            }
            Orientation::Vertical => {
                !self.has_anchor(Orientation::Vertical, row - 1, col)
                    && !self.has_anchor(Orientation::Vertical, row + 1, col)
            }
        }
    }

    /// Record a wall. `owner` is optional so legality probes stay unattributed.
    pub fn place_wall(&mut self, wall: Wall, owner: Option<Player>) -> QuoridorResult<()> {
        if !self.wall_legal(wall) {
            return Err(QuoridorError::IllegalPlacement(wall));
        }
        self.set_anchor(wall, true);
        if let Some(owner) = owner {
            self.owners.insert(wall, owner);
        }
        Ok(())
    }

    /// Remove a wall and its owner entry; absent walls are ignored.
    pub fn remove_wall(&mut self, wall: Wall) {
        if self.anchor_in_range(i16::from(wall.anchor.row), i16::from(wall.anchor.col)) {
            self.set_anchor(wall, false);
        }
        self.owners.remove(&wall);
    }

    fn set_anchor(&mut self, wall: Wall, value: bool) {
        let idx = self.anchor_index(wall.anchor.row, wall.anchor.col);
        match wall.orientation {
            Orientation::Horizontal => self.horizontal[idx] = value,
            Orientation::Vertical => self.vertical[idx] = value,
        }
    }

    /// Attribute an already placed wall.
    pub fn set_owner(&mut self, wall: Wall, owner: Player) -> QuoridorResult<()> {
        if !self.contains_wall(wall) {
            return Err(QuoridorError::IllegalPlacement(wall));
        }
        self.owners.insert(wall, owner);
        Ok(())
    }

    #[inline]
    pub fn owner_of(&self, wall: Wall) -> Option<Player> {
        self.owners.get(&wall).copied()
    }

    #[inline]
    pub fn owners(&self) -> &BTreeMap<Wall, Player> {
        &self.owners
    }

    /// All placed walls of one orientation in row-major anchor order.
    pub fn walls(&self, orientation: Orientation) -> Vec<Wall> {
        let grid = match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        };
        let width = usize::from(self.size.saturating_sub(1));
        grid.iter()
            .enumerate()
            .filter(|(_, placed)| **placed)
            .map(|(idx, _)| Wall::new((idx / width) as u8, (idx % width) as u8, orientation))
            .collect()
    }

    pub fn wall_count(&self) -> usize {
        self.horizontal.iter().chain(self.vertical.iter()).filter(|x| **x).count()
    }

    /// True when a wall separates two orthogonally adjacent cells.
    ///
    /// Non-adjacent pairs are reported as blocked.
    pub fn blocked_between(&self, a: Cell, b: Cell) -> bool {
        let (ar, ac) = (i16::from(a.row), i16::from(a.col));
        let (br, bc) = (i16::from(b.row), i16::from(b.col));
        if ar == br && (ac - bc).abs() == 1 {
            let col = ac.min(bc);
            return self.has_anchor(Orientation::Vertical, ar, col)
                || self.has_anchor(Orientation::Vertical, ar - 1, col);
        }
        if ac == bc && (ar - br).abs() == 1 {
            let row = ar.min(br);
            return self.has_anchor(Orientation::Horizontal, row, ac)
                || self.has_anchor(Orientation::Horizontal, row, ac - 1);
        }
        true
    }

    /// Orthogonal in-bounds cells reachable from `cell` in one unblocked step,
    /// enumerated up, down, left, right.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut out = Vec::with_capacity(4);
        self.for_each_neighbor(cell, |next| out.push(next));
        out
    }

    #[inline]
    pub(crate) fn for_each_neighbor<F: FnMut(Cell)>(&self, cell: Cell, mut f: F) {
        for (d_row, d_col) in DIRECTIONS {
            if let Some(next) = cell.offset(d_row, d_col, self.size) {
                if !self.blocked_between(cell, next) {
                    f(next);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_accepts_every_anchor() {
        let board = Board::new(9);
        for row in 0..8 {
            for col in 0..8 {
                assert!(board.wall_legal(Wall::horizontal(row, col)));
                assert!(board.wall_legal(Wall::vertical(row, col)));
            }
        }
        assert!(!board.wall_legal(Wall::horizontal(8, 0)));
        assert!(!board.wall_legal(Wall::vertical(0, 8)));
    }

    #[test]
    fn duplicate_crossing_and_half_overlap_are_rejected() {
        let mut board = Board::new(9);
        board
            .place_wall(Wall::horizontal(3, 3), Some(Player::North))
            .expect("first wall should place");

        assert!(!board.wall_legal(Wall::horizontal(3, 3)));
        assert!(!board.wall_legal(Wall::vertical(3, 3)));
        assert!(!board.wall_legal(Wall::horizontal(3, 2)));
        assert!(!board.wall_legal(Wall::horizontal(3, 4)));

        // Adjacent but not overlapping.
        assert!(board.wall_legal(Wall::horizontal(3, 1)));
        assert!(board.wall_legal(Wall::horizontal(3, 5)));
        assert!(board.wall_legal(Wall::horizontal(2, 3)));
        assert!(board.wall_legal(Wall::vertical(2, 3)));
        assert!(board.wall_legal(Wall::vertical(4, 3)));

        board
            .place_wall(Wall::vertical(5, 5), None)
            .expect("vertical wall should place");
        assert!(!board.wall_legal(Wall::vertical(4, 5)));
        assert!(!board.wall_legal(Wall::vertical(6, 5)));
        assert!(board.wall_legal(Wall::vertical(5, 4)));
    }

    #[test]
    fn placing_illegal_wall_fails() {
        let mut board = Board::new(9);
        board.place_wall(Wall::vertical(0, 0), None).expect("should place");
        assert_eq!(
            board.place_wall(Wall::horizontal(0, 0), None),
            Err(QuoridorError::IllegalPlacement(Wall::horizontal(0, 0)))
        );
    }

    #[test]
    fn horizontal_wall_blocks_two_columns() {
        let mut board = Board::new(9);
        board.place_wall(Wall::horizontal(0, 4), None).expect("should place");

        assert!(board.blocked_between(Cell::new(0, 4), Cell::new(1, 4)));
        assert!(board.blocked_between(Cell::new(0, 5), Cell::new(1, 5)));
        assert!(!board.blocked_between(Cell::new(0, 3), Cell::new(1, 3)));
        assert!(!board.blocked_between(Cell::new(0, 4), Cell::new(0, 5)));

        assert_eq!(
            board.neighbors(Cell::new(0, 4)),
            vec![Cell::new(0, 3), Cell::new(0, 5)]
        );
    }

    #[test]
    fn vertical_wall_blocks_two_rows() {
        let mut board = Board::new(9);
        board.place_wall(Wall::vertical(3, 2), None).expect("should place");

        assert!(board.blocked_between(Cell::new(3, 2), Cell::new(3, 3)));
        assert!(board.blocked_between(Cell::new(4, 3), Cell::new(4, 2)));
        assert!(!board.blocked_between(Cell::new(5, 2), Cell::new(5, 3)));
        assert!(!board.blocked_between(Cell::new(2, 2), Cell::new(2, 3)));
    }

    #[test]
    fn neighbors_respect_edges() {
        let board = Board::new(9);
        assert_eq!(
            board.neighbors(Cell::new(0, 0)),
            vec![Cell::new(1, 0), Cell::new(0, 1)]
        );
        assert_eq!(board.neighbors(Cell::new(4, 4)).len(), 4);
    }

    #[test]
    fn remove_wall_is_idempotent_and_drops_owner() {
        let mut board = Board::new(9);
        let wall = Wall::horizontal(1, 1);
        board.place_wall(wall, Some(Player::South)).expect("should place");
        assert_eq!(board.owner_of(wall), Some(Player::South));

        board.remove_wall(wall);
        board.remove_wall(wall);
        board.remove_wall(Wall::horizontal(20, 20));

        assert!(!board.contains_wall(wall));
        assert_eq!(board.owner_of(wall), None);
        assert_eq!(board, Board::new(9));
    }

    #[test]
    fn place_then_remove_restores_legality_of_other_walls() {
        let mut board = Board::new(9);
        board.place_wall(Wall::vertical(2, 6), None).expect("should place");
        let before: Vec<bool> = all_walls(9).map(|w| board.wall_legal(w)).collect();

        let probe = Wall::horizontal(4, 4);
        board.place_wall(probe, Some(Player::North)).expect("should place");
        board.remove_wall(probe);

        let after: Vec<bool> = all_walls(9).map(|w| board.wall_legal(w)).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn walls_are_listed_per_orientation() {
        let mut board = Board::new(5);
        board.place_wall(Wall::horizontal(2, 1), None).expect("should place");
        board.place_wall(Wall::vertical(0, 3), None).expect("should place");
        assert_eq!(board.walls(Orientation::Horizontal), vec![Wall::horizontal(2, 1)]);
        assert_eq!(board.walls(Orientation::Vertical), vec![Wall::vertical(0, 3)]);
        assert_eq!(board.wall_count(), 2);
    }

    fn all_walls(n: u8) -> impl Iterator<Item = Wall> {
        (0..n - 1).flat_map(move |row| {
            (0..n - 1).flat_map(move |col| {
                [Wall::horizontal(row, col), Wall::vertical(row, col)]
            })
        })
    }
}

//! Value types shared by the board, rules, search and notation layers.

use serde::{Deserialize, Serialize};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::snapshot::Snapshot;

/// Side to move, named by the edge the pawn starts on.
///
/// `North` starts on row 0 and races to row `N - 1`; `South` starts on row
/// `N - 1` and races to row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    North,
    South,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::North, Player::South];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Player::North => 0,
            Player::South => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Player::North => Player::South,
            Player::South => Player::North,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        if index == 0 {
            Player::North
        } else {
            Player::South
        }
    }

    /// The single goal row for this player on an `n x n` board.
    #[inline]
    pub const fn goal_row(self, n: u8) -> u8 {
        match self {
            Player::North => n - 1,
            Player::South => 0,
        }
    }
}

/// Grid cell, `(row, col)` with row 0 on North's edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Step by `(d_row, d_col)`, returning `None` when leaving an `n x n` grid.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8, n: u8) -> Option<Cell> {
        let row = i16::from(self.row) + i16::from(d_row);
        let col = i16::from(self.col) + i16::from(d_col);
        let limit = i16::from(n);
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Cell::new(row as u8, col as u8))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A two-unit wall identified by its top-left anchor intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Wall {
    pub anchor: Cell,
    pub orientation: Orientation,
}

impl Wall {
    #[inline]
    pub const fn new(row: u8, col: u8, orientation: Orientation) -> Self {
        Self {
            anchor: Cell::new(row, col),
            orientation,
        }
    }

    #[inline]
    pub const fn horizontal(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Horizontal)
    }

    #[inline]
    pub const fn vertical(row: u8, col: u8) -> Self {
        Self::new(row, col, Orientation::Vertical)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Pawn(Cell),
    Wall(Wall),
}

impl Move {
    #[inline]
    pub const fn pawn(row: u8, col: u8) -> Self {
        Move::Pawn(Cell::new(row, col))
    }

    #[inline]
    pub const fn wall(row: u8, col: u8, orientation: Orientation) -> Self {
        Move::Wall(Wall::new(row, col, orientation))
    }

    #[inline]
    pub const fn is_wall(&self) -> bool {
        matches!(self, Move::Wall(_))
    }
}

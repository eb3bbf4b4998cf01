//! Canonical Quoridor rule constants.

/// Standard board edge length.
pub const DEFAULT_BOARD_SIZE: u8 = 9;

/// Smallest board that still has a wall anchor and a distinct middle column.
pub const MIN_BOARD_SIZE: u8 = 3;

/// Largest supported board; keeps cells and anchors inside `u8`.
pub const MAX_BOARD_SIZE: u8 = 25;

/// Walls each player starts with in the two-player game.
pub const DEFAULT_WALLS_PER_PLAYER: u8 = 10;

/// Orthogonal step directions in neighbor enumeration order: up, down, left, right.
pub const DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

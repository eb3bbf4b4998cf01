//! Zobrist-style position keys for repetition detection.
//!
//! A key covers exactly the canonical position: both pawn cells, both wall
//! sets and the side to move. Walls-left counters and ownership are not part
//! of it. Board sizes vary, so instead of fixed tables every term is derived
//! from a splitmix64 mix of a fixed seed and the term's coordinates, which
//! keeps keys deterministic across runs.

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::{Cell, Orientation, Player, Wall};

const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

const TAG_PAWN: u64 = 1;
const TAG_HORIZONTAL: u64 = 2;
const TAG_VERTICAL: u64 = 3;
const TAG_SIDE: u64 = 4;

#[inline]
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn term(tag: u64, a: u64, b: u64, c: u64) -> u64 {
    splitmix64(SEED ^ (tag << 48) ^ (a << 32) ^ (b << 16) ^ c)
}

/// Key contribution of `player`'s pawn standing on `cell`.
#[inline]
pub fn pawn_key(player: Player, cell: Cell) -> u64 {
    term(
        TAG_PAWN,
        player.index() as u64,
        u64::from(cell.row),
        u64::from(cell.col),
    )
}

#[inline]
pub fn wall_key(wall: Wall) -> u64 {
    let tag = match wall.orientation {
        Orientation::Horizontal => TAG_HORIZONTAL,
        Orientation::Vertical => TAG_VERTICAL,
    };
    term(tag, 0, u64::from(wall.anchor.row), u64::from(wall.anchor.col))
}

/// Toggle xored in when South is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    term(TAG_SIDE, 0, 0, 0)
}

pub fn compute_position_key(game_state: &GameState) -> u64 {
    let mut key = 0u64;
    for player in Player::ALL {
        key ^= pawn_key(player, game_state.pawn(player));
    }
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        for wall in game_state.board().walls(orientation) {
            key ^= wall_key(wall);
        }
    }
    if game_state.side_to_move() == Player::South {
        key ^= side_to_move_key();
    }
    key
}

impl GameState {
    #[inline]
    pub fn position_key(&self) -> u64 {
        compute_position_key(self)
    }
}

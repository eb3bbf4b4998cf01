//! Pawn step and jump generation.
//!
//! A pawn steps to any unblocked orthogonal neighbor. When that neighbor holds
//! the opponent, the step becomes a straight jump over it; if the landing cell
//! is off the board or behind a wall, the mover may instead side-step to one of
//! the two cells beside the opponent, perpendicular to the jump direction,
//! provided no wall separates that cell from the opponent.

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Cell;

impl GameState {
    pub fn legal_pawn_moves(&self) -> Vec<Cell> {
        let me = self.side_to_move;
        let mine = self.pawn(me);
        let theirs = self.pawn(me.opposite());
        let n = self.size();

        let mut moves = Vec::with_capacity(6);
        for step in self.board.neighbors(mine) {
            if step != theirs {
                push_unique(&mut moves, step);
                continue;
            }

            let d_row = theirs.row as i8 - mine.row as i8;
            let d_col = theirs.col as i8 - mine.col as i8;
            let landing = theirs.offset(d_row, d_col, n);
            let straight_blocked = match landing {
                Some(cell) => self.board.blocked_between(theirs, cell),
                None => true,
            };

            if let (Some(cell), false) = (landing, straight_blocked) {
                push_unique(&mut moves, cell);
                continue;
            }

            let sides = if d_row != 0 {
                [(0, -1), (0, 1)]
            } else {
                [(-1, 0), (1, 0)]
            };
            for (s_row, s_col) in sides {
                let Some(diagonal) = theirs.offset(s_row, s_col, n) else {
                    continue;
                };
                if straight_blocked && !self.board.blocked_between(theirs, diagonal) {
                    push_unique(&mut moves, diagonal);
                }
            }
        }
        moves
    }
}

#[inline]
fn push_unique(moves: &mut Vec<Cell>, cell: Cell) {
    if !moves.contains(&cell) {
        moves.push(cell);
    }
}

//! Wall placement generation with the connectivity check.

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::{Move, Orientation, Player, Wall};

impl GameState {
    /// Every wall the side to move may commit right now.
    ///
    /// Candidates must pass `wall_legal` and, once tentatively placed on a
    /// scratch copy of the board, leave both pawns a route to their goal rows.
    pub fn legal_wall_moves(&self) -> Vec<Wall> {
        if self.walls_left(self.side_to_move) == 0 {
            return Vec::new();
        }

        let anchors = self.size() - 1;
        let mut probe = self.board.clone();
        let north = (self.pawn(Player::North), self.goal_rows(Player::North));
        let south = (self.pawn(Player::South), self.goal_rows(Player::South));

        let mut walls = Vec::new();
        for row in 0..anchors {
            for col in 0..anchors {
                for orientation in [Orientation::Horizontal, Orientation::Vertical] {
                    let wall = Wall::new(row, col, orientation);
                    if probe.place_wall(wall, None).is_err() {
                        continue;
                    }
                    let connected = probe.path_exists_for(north.0, &north.1)
                        && probe.path_exists_for(south.0, &south.1);
                    probe.remove_wall(wall);
                    if connected {
                        walls.push(wall);
                    }
                }
            }
        }
        walls
    }

    /// Pawn moves first, then wall placements.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves: Vec<Move> = self.legal_pawn_moves().into_iter().map(Move::Pawn).collect();
        moves.extend(self.legal_wall_moves().into_iter().map(Move::Wall));
        moves
    }
}

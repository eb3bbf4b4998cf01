//! Move application and undo.
//!
//! `apply` validates and commits a move, recording a pre-move snapshot for
//! `undo`. Search uses `apply_with_history(.., false)` together with its own
//! snapshot so exploration never lands in the permanent undo log.

use log::trace;

use crate::errors::{QuoridorError, QuoridorResult};
use crate::game_state::game_events::GameEvent;
use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::Move;

impl GameState {
    #[inline]
    pub fn apply(&mut self, mv: Move) -> QuoridorResult<()> {
        self.apply_with_history(mv, true)
    }

    pub fn apply_with_history(&mut self, mv: Move, record_history: bool) -> QuoridorResult<()> {
        let me = self.side_to_move;
        let before = record_history.then(|| self.snapshot());

        let event = match mv {
            Move::Pawn(dest) => {
                if !self.legal_pawn_moves().contains(&dest) {
                    return Err(QuoridorError::IllegalMove(dest));
                }
                let from = self.pawns[me.index()];
                self.pawns[me.index()] = dest;
                GameEvent::PawnMoved {
                    player: me,
                    from,
                    to: dest,
                }
            }
            Move::Wall(wall) => {
                if self.walls_left[me.index()] == 0 {
                    return Err(QuoridorError::NoWallsLeft(me));
                }
                self.board.place_wall(wall, Some(me))?;
                if !self.both_players_connected() {
                    self.board.remove_wall(wall);
                    return Err(QuoridorError::BlocksAllPaths(wall));
                }
                self.walls_left[me.index()] -= 1;
                GameEvent::WallPlaced { player: me, wall }
            }
        };

        self.side_to_move = me.opposite();

        if let Some(snapshot) = before {
            trace!("{me:?} played {mv}");
            self.history.push(snapshot);
            self.events.push(event);
            if let Some(winner) = self.winner() {
                self.events.push(GameEvent::GameWon { winner });
            }
        }
        Ok(())
    }

    /// Step back one recorded move; does nothing on an empty history.
    pub fn undo(&mut self) {
        if let Some(snapshot) = self.history.pop() {
            self.restore(&snapshot);
            self.events.push(GameEvent::MoveUndone);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::QuoridorError;
    use crate::game_state::game_events::GameEvent;
    use crate::game_state::game_state::GameState;
    use crate::game_state::quoridor_types::{Cell, Move, Player, Wall};

    #[test]
    fn pawn_move_flips_turn_and_records_history() {
        let mut game = GameState::new_game();
        game.apply(Move::pawn(1, 4)).expect("legal step");

        assert_eq!(game.pawn(Player::North), Cell::new(1, 4));
        assert_eq!(game.side_to_move(), Player::South);
        assert_eq!(game.history().len(), 1);
        assert_eq!(
            game.drain_events(),
            vec![GameEvent::PawnMoved {
                player: Player::North,
                from: Cell::new(0, 4),
                to: Cell::new(1, 4),
            }]
        );
    }

    #[test]
    fn illegal_pawn_move_is_rejected_without_side_effects() {
        let mut game = GameState::new_game();
        let before = game.snapshot();
        assert_eq!(
            game.apply(Move::pawn(2, 4)),
            Err(QuoridorError::IllegalMove(Cell::new(2, 4)))
        );
        assert_eq!(game.snapshot(), before);
        assert!(game.history().is_empty());
        assert!(game.events().is_empty());
    }

    #[test]
    fn wall_move_decrements_and_attributes() {
        let mut game = GameState::new_game();
        let wall = Wall::horizontal(3, 3);
        game.apply(Move::Wall(wall)).expect("legal wall");

        assert_eq!(game.walls_left(Player::North), 9);
        assert_eq!(game.walls_left(Player::South), 10);
        assert_eq!(game.board().owner_of(wall), Some(Player::North));
        assert_eq!(game.side_to_move(), Player::South);
    }

    #[test]
    fn wall_errors_follow_taxonomy_order() {
        let mut game = GameState::from_position(
            9,
            [Cell::new(0, 4), Cell::new(8, 4)],
            &[Wall::horizontal(3, 3)],
            [0, 10],
            Player::North,
        )
        .expect("valid position");
        assert_eq!(
            game.apply(Move::Wall(Wall::horizontal(3, 3))),
            Err(QuoridorError::NoWallsLeft(Player::North))
        );

        game.apply(Move::pawn(1, 4)).expect("legal step");
        assert_eq!(
            game.apply(Move::Wall(Wall::horizontal(3, 4))),
            Err(QuoridorError::IllegalPlacement(Wall::horizontal(3, 4)))
        );
    }

    #[test]
    fn disconnecting_wall_is_rolled_back() {
        let mut game = GameState::from_position(
            9,
            [Cell::new(0, 4), Cell::new(8, 0)],
            &[Wall::vertical(7, 0)],
            [10, 10],
            Player::North,
        )
        .expect("valid position");
        let before = game.snapshot();

        let sealing = Wall::horizontal(6, 0);
        assert_eq!(
            game.apply(Move::Wall(sealing)),
            Err(QuoridorError::BlocksAllPaths(sealing))
        );
        assert_eq!(game.snapshot(), before);
        assert!(!game.board().contains_wall(sealing));
        assert!(game.history().is_empty());
    }

    #[test]
    fn apply_then_undo_restores_everything() {
        let mut game = GameState::new_game();
        game.apply(Move::pawn(1, 4)).expect("legal");
        game.apply(Move::Wall(Wall::vertical(2, 2))).expect("legal");
        let before = game.snapshot();

        game.apply(Move::Wall(Wall::horizontal(5, 5))).expect("legal");
        assert_ne!(game.snapshot(), before);
        game.undo();
        assert_eq!(game.snapshot(), before);
        assert_eq!(game.board().owner_of(Wall::vertical(2, 2)), Some(Player::South));

        game.undo();
        game.undo();
        game.undo();
        assert_eq!(game.snapshot(), GameState::new_game().snapshot());
        assert!(game.history().is_empty());
    }

    #[test]
    fn unrecorded_apply_leaves_history_and_events_alone() {
        let mut game = GameState::new_game();
        game.apply_with_history(Move::pawn(1, 4), false)
            .expect("legal");
        assert!(game.history().is_empty());
        assert!(game.events().is_empty());
        assert_eq!(game.side_to_move(), Player::South);
    }

    #[test]
    fn reaching_the_goal_row_emits_a_win() {
        let mut game = GameState::from_position(
            9,
            [Cell::new(7, 0), Cell::new(4, 8)],
            &[],
            [10, 10],
            Player::North,
        )
        .expect("valid position");
        game.apply(Move::pawn(8, 0)).expect("legal");

        assert_eq!(game.winner(), Some(Player::North));
        let events = game.drain_events();
        assert_eq!(
            events.last(),
            Some(&GameEvent::GameWon {
                winner: Player::North
            })
        );
    }
}

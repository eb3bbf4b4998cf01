//! Terminal-oriented text board renderer.
//!
//! Draws pawns, walls and the side to move for debugging, tests and the
//! self-play demo. Row 1 (North's home row) is printed at the bottom so the
//! picture matches the cell notation.

use crate::game_state::game_state::GameState;
use crate::game_state::quoridor_types::{Cell, Player};

/// Render the board to a string for terminal output.
///
/// `|` marks a vertical wall between two cells of a row and `-` marks a
/// horizontal wall under a cell.
pub fn render_game_state(game_state: &GameState) -> String {
    let n = game_state.size();
    let mut lines = Vec::with_capacity(2 * usize::from(n) + 2);

    let columns = column_header(n);
    lines.push(columns.clone());

    for row in (0..n).rev() {
        let mut line = format!("{:>2} ", u16::from(row) + 1);
        for col in 0..n {
            let cell = Cell::new(row, col);
            line.push(cell_glyph(game_state, cell));
            if col + 1 < n {
                let right = Cell::new(row, col + 1);
                line.push(if game_state.board().blocked_between(cell, right) {
                    '|'
                } else {
                    ' '
                });
            }
        }
        lines.push(line);

        if row > 0 {
            let mut between = String::from("   ");
            for col in 0..n {
                let below = Cell::new(row - 1, col);
                let blocked = game_state
                    .board()
                    .blocked_between(Cell::new(row, col), below);
                between.push(if blocked { '-' } else { ' ' });
                between.push(' ');
            }
            lines.push(between.trim_end().to_owned());
        }
    }

    lines.push(columns);
    lines.push(format!(
        "{:?} to move | walls North {} South {}",
        game_state.side_to_move(),
        game_state.walls_left(Player::North),
        game_state.walls_left(Player::South)
    ));
    lines.join("\n")
}

fn column_header(n: u8) -> String {
    let letters: Vec<String> = (0..n).map(|c| char::from(b'a' + c).to_string()).collect();
    format!("   {}", letters.join(" "))
}

fn cell_glyph(game_state: &GameState, cell: Cell) -> char {
    if game_state.pawn(Player::North) == cell {
        'N'
    } else if game_state.pawn(Player::South) == cell {
        'S'
    } else {
        '·'
    }
}

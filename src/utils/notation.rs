//! Text notation for cells, walls and moves.
//!
//! Columns are letters from `a`, rows are 1-based numbers from North's edge:
//! cell `(0, 4)` is `e1`. A wall is its anchor cell followed by `h` or `v`,
//! so `e3h` is the horizontal wall anchored at `(2, 4)`. A pawn move is just
//! the destination cell.

use std::fmt;

use crate::errors::NotationError;
use crate::game_state::quoridor_types::{Cell, Move, Orientation, Wall};

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", char::from(b'a' + self.col), u32::from(self.row) + 1)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => f.write_str("h"),
            Orientation::Vertical => f.write_str("v"),
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.anchor, self.orientation)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Pawn(cell) => write!(f, "{cell}"),
            Move::Wall(wall) => write!(f, "{wall}"),
        }
    }
}

/// Parse a cell token such as `e1` for an `size x size` board.
pub fn parse_cell(token: &str, size: u8) -> Result<Cell, NotationError> {
    let token = token.trim();
    let mut chars = token.chars();
    let col_char = chars.next().ok_or(NotationError::Empty)?;
    if !col_char.is_ascii_lowercase() {
        return Err(NotationError::InvalidColumn(col_char));
    }
    let col = col_char as u32 - u32::from(b'a');

    let row_text = chars.as_str();
    let row_number: u32 = row_text
        .parse()
        .map_err(|_| NotationError::InvalidRow(token.to_owned()))?;
    if row_number == 0 {
        return Err(NotationError::InvalidRow(token.to_owned()));
    }

    let limit = u32::from(size);
    if col >= limit || row_number > limit {
        return Err(NotationError::OutOfBounds {
            token: token.to_owned(),
            size,
        });
    }
    Ok(Cell::new((row_number - 1) as u8, col as u8))
}

/// Parse a wall token such as `e3h`; the anchor must be a valid wall anchor.
pub fn parse_wall(token: &str, size: u8) -> Result<Wall, NotationError> {
    let token = token.trim();
    let orientation_char = token.chars().last().ok_or(NotationError::Empty)?;
    let orientation = match orientation_char {
        'h' | 'H' => Orientation::Horizontal,
        'v' | 'V' => Orientation::Vertical,
        other => return Err(NotationError::InvalidOrientation(other)),
    };
    let anchor = parse_cell(&token[..token.len() - orientation_char.len_utf8()], size)?;
    if anchor.row + 1 >= size || anchor.col + 1 >= size {
        return Err(NotationError::OutOfBounds {
            token: token.to_owned(),
            size,
        });
    }
    Ok(Wall {
        anchor,
        orientation,
    })
}

/// Parse either a pawn destination or a wall placement.
pub fn parse_move(token: &str, size: u8) -> Result<Move, NotationError> {
    let token = token.trim();
    match token.chars().last() {
        None => Err(NotationError::Empty),
        Some(c) if c.is_ascii_digit() => parse_cell(token, size).map(Move::Pawn),
        Some(_) => parse_wall(token, size).map(Move::Wall),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::game_state::GameState;
    use crate::game_state::quoridor_rules::MAX_BOARD_SIZE;

    #[test]
    fn cells_and_walls_format() {
        assert_eq!(Cell::new(0, 4).to_string(), "e1");
        assert_eq!(Cell::new(8, 8).to_string(), "i9");
        assert_eq!(Wall::horizontal(2, 4).to_string(), "e3h");
        assert_eq!(Move::wall(0, 0, Orientation::Vertical).to_string(), "a1v");
    }

    #[test]
    fn parses_tokens() {
        assert_eq!(parse_cell("e1", 9), Ok(Cell::new(0, 4)));
        assert_eq!(parse_move("i9", 9), Ok(Move::pawn(8, 8)));
        assert_eq!(parse_move("e3H", 9), Ok(Move::wall(2, 4, Orientation::Horizontal)));
        assert_eq!(parse_wall(" h8v ", 9), Ok(Wall::vertical(7, 7)));
    }

    #[test]
    fn rejects_bad_tokens() {
        assert_eq!(parse_move("", 9), Err(NotationError::Empty));
        assert_eq!(parse_cell("E1", 9), Err(NotationError::InvalidColumn('E')));
        assert_eq!(parse_cell("e0", 9), Err(NotationError::InvalidRow("e0".to_owned())));
        assert_eq!(parse_wall("e3x", 9), Err(NotationError::InvalidOrientation('x')));
        assert!(matches!(parse_cell("j1", 9), Err(NotationError::OutOfBounds { .. })));
        assert!(matches!(parse_wall("i1h", 9), Err(NotationError::OutOfBounds { .. })));
        assert!(matches!(parse_wall("a9v", 9), Err(NotationError::OutOfBounds { .. })));
    }

    #[test]
    fn largest_board_corners_stay_in_the_alphabet() {
        let game = GameState::with_size(MAX_BOARD_SIZE).expect("largest board");
        let corner = Cell::new(MAX_BOARD_SIZE - 1, MAX_BOARD_SIZE - 1);
        assert_eq!(corner.to_string(), "y25");
        assert_eq!(parse_cell("y25", game.size()), Ok(corner));
        assert!(GameState::with_size(MAX_BOARD_SIZE + 1).is_err());
    }

    #[test]
    fn every_opening_move_survives_text() {
        let game = GameState::new_game();
        for mv in game.legal_moves() {
            let text = mv.to_string();
            assert_eq!(parse_move(&text, game.size()), Ok(mv), "token {text}");
        }
    }
}

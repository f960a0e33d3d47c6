//! Keyboard mapping for the terminal front-end.

use crossterm::event::KeyCode;
use retro_tictactoe::{Intent, Position};

/// Cursor direction on the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Direction),
    /// Play the square under the cursor.
    Select,
    /// Forward an intent to the match.
    Play(Intent),
    /// Leave the game.
    Quit,
}

/// Maps a key to an action. Digits 1-9 address squares like a phone keypad
/// laid over the board.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Some(Action::Play(Intent::Cell(index)))
        }
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Action::Play(Intent::NewRound)),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Play(Intent::ResetMatch)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::Cursor(Direction::Right)),
        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_address_cells() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::Play(Intent::Cell(0))));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::Play(Intent::Cell(8))));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for(KeyCode::Char('n')), Some(Action::Play(Intent::NewRound)));
        assert_eq!(action_for(KeyCode::Char('r')), Some(Action::Play(Intent::ResetMatch)));
        assert_eq!(action_for(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for(KeyCode::Enter), Some(Action::Select));
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, Direction::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
    }
}

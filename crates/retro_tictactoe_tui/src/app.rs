//! Application state and key handling.

use super::input::{self, Action};
use retro_tictactoe::{Intent, Match, MatchView, MoveOutcome, Position};
use tracing::{debug, instrument};

/// Whether the event loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep drawing and reading keys.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Holds the match and the keyboard cursor. Everything drawn on screen comes
/// from [`App::view`], so the front-end never evaluates rules itself.
#[derive(Debug, Clone)]
pub struct App {
    game: Match,
    cursor: Position,
    notice: Option<String>,
    show_tips: bool,
}

impl App {
    /// Creates a new application with a fresh match.
    pub fn new(show_tips: bool) -> Self {
        Self {
            game: Match::new(),
            cursor: Position::Center,
            notice: None,
            show_tips,
        }
    }

    /// Gets the current match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Snapshot to render.
    pub fn view(&self) -> MatchView {
        self.game.view()
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Why the last intent was ignored, if it was.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the footer tip is shown.
    pub fn show_tips(&self) -> bool {
        self.show_tips
    }

    /// Applies a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: crossterm::event::KeyCode) -> Control {
        let Some(action) = input::action_for(key) else {
            return Control::Continue;
        };
        debug!(?action, "Key mapped");

        match action {
            Action::Quit => return Control::Quit,
            Action::Cursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::Select => self.forward(Intent::from(self.cursor)),
            Action::Play(intent) => {
                if let Intent::Cell(index) = intent
                    && let Some(pos) = Position::from_index(index)
                {
                    self.cursor = pos;
                }
                self.forward(intent);
            }
        }
        Control::Continue
    }

    /// Sends an intent to the match and records any rejection.
    fn forward(&mut self, intent: Intent) {
        self.notice = match self.game.dispatch(intent) {
            Some(MoveOutcome::Ignored(reason)) => Some(reason.to_string()),
            _ => None,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;
    use retro_tictactoe::Player;

    #[test]
    fn test_digit_plays_and_moves_cursor() {
        let mut app = App::new(true);
        assert_eq!(app.handle_key(KeyCode::Char('1')), Control::Continue);
        assert_eq!(app.cursor(), Position::TopLeft);
        assert_eq!(app.game().board().cells()[0], Some(Player::X));
    }

    #[test]
    fn test_enter_plays_cursor_square() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.game().board().cells()[1], Some(Player::X));
        assert_eq!(app.view().status(), "Next: O");
    }

    #[test]
    fn test_rejected_move_sets_notice() {
        let mut app = App::new(true);
        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.notice(), Some("Square Center is already occupied"));
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_new_round_and_reset_keys() {
        let mut app = App::new(true);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.view().status(), "Player X wins!");

        app.handle_key(KeyCode::Char('n'));
        assert_eq!(app.view().status(), "Next: X");
        assert_eq!(*app.game().score().x(), 1);

        app.handle_key(KeyCode::Char('r'));
        assert_eq!(*app.game().score().x(), 0);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(false);
        assert_eq!(app.handle_key(KeyCode::Char('q')), Control::Quit);
        assert_eq!(app.handle_key(KeyCode::Char('x')), Control::Continue);
    }
}

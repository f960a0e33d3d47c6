//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board positions that win when held by one player.
pub type WinLine = [Position; 3];

/// All winning lines in scan order: rows top-to-bottom, columns
/// left-to-right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Result of scanning a board for a completed line.
///
/// `winner` and `line` are either both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WinnerInfo {
    /// Player owning the first completed line.
    pub winner: Option<Player>,
    /// The first completed line in scan order.
    pub line: Option<WinLine>,
}

impl WinnerInfo {
    /// Returns true if the scanned line contains `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.is_some_and(|line| line.contains(&pos))
    }

    /// Winning line as raw board indices.
    pub fn indices(&self) -> Option<[usize; 3]> {
        self.line.map(|line| line.map(Position::to_index))
    }
}

/// Scans the fixed win lines and returns the first one held by a single
/// player.
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> WinnerInfo {
    for line in WIN_LINES {
        if let Some(player) = line_owner(board, line) {
            return WinnerInfo {
                winner: Some(player),
                line: Some(line),
            };
        }
    }

    WinnerInfo::default()
}

/// Returns the player holding all three squares of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: WinLine) -> Option<Player> {
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        let mut board = Board::new();
        for pos in positions {
            board.set(*pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate_winner(&board), WinnerInfo::default());
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        let info = evaluate_winner(&board);
        assert_eq!(info.winner, Some(Player::X));
        assert_eq!(info.indices(), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopLeft, Position::Center, Position::BottomRight],
        );
        let info = evaluate_winner(&board);
        assert_eq!(info.winner, Some(Player::O));
        assert_eq!(info.indices(), Some([0, 4, 8]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter]);
        assert_eq!(evaluate_winner(&board).winner, None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WIN_LINES {
            let board = board_with(Player::O, &line);
            let info = evaluate_winner(&board);
            assert_eq!(info.winner, Some(Player::O));
            assert_eq!(info.line, Some(line));
        }
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // Top row and left column both complete; the row is scanned first.
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(evaluate_winner(&board).indices(), Some([0, 1, 2]));
    }

    #[test]
    fn test_column_scanned_before_diagonal() {
        let board = board_with(
            Player::X,
            &[
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
                Position::Center,
                Position::TopLeft,
            ],
        );
        assert_eq!(evaluate_winner(&board).indices(), Some([2, 5, 8]));
    }

    #[test]
    fn test_contains() {
        let board = board_with(
            Player::X,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let info = evaluate_winner(&board);
        assert!(info.contains(Position::Center));
        assert!(!info.contains(Position::TopLeft));
    }
}

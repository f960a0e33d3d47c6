//! Single winner invariant: lines belong to at most one player.

use super::super::rules::{WIN_LINES, win::line_owner};
use super::super::{Board, Match, Player};
use super::Invariant;

/// Invariant: X and O never both hold a completed line.
///
/// A round stops at the first completed line, so the loser can never
/// complete one afterwards. One player may hold two lines at once (a fork
/// closed by a single mark).
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    /// Checks a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let owns_line = |player: Player| {
            WIN_LINES
                .iter()
                .any(|line| line_owner(board, *line) == Some(player))
        };
        !(owns_line(Player::X) && owns_line(Player::O))
    }
}

impl Invariant<Match> for SingleWinnerInvariant {
    fn holds(game: &Match) -> bool {
        Self::holds_for(game.board())
    }

    fn description() -> &'static str {
        "At most one player holds a completed line"
    }
}

//! Mark balance invariant: X leads O by at most one mark.

use super::super::{Board, Match, Player};
use super::Invariant;

/// Invariant: X has as many marks as O, or exactly one more.
///
/// X opens every round and players alternate, so no other count is
/// reachable.
pub struct MarkBalanceInvariant;

impl MarkBalanceInvariant {
    /// Checks the balance on a bare board.
    pub fn holds_for(board: &Board) -> bool {
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }
}

impl Invariant<Match> for MarkBalanceInvariant {
    fn holds(game: &Match) -> bool {
        Self::holds_for(game.board())
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);

    #[test]
    fn test_balanced_boards_hold() {
        assert!(MarkBalanceInvariant::holds_for(&Board::new()));
        assert!(MarkBalanceInvariant::holds_for(&Board::from_cells([
            X, None, None, None, None, None, None, None, None
        ])));
        assert!(MarkBalanceInvariant::holds_for(&Board::from_cells([
            X, O, None, None, None, None, None, None, None
        ])));
    }

    #[test]
    fn test_o_ahead_violates() {
        assert!(!MarkBalanceInvariant::holds_for(&Board::from_cells([
            O, None, None, None, None, None, None, None, None
        ])));
    }

    #[test]
    fn test_x_two_ahead_violates() {
        assert!(!MarkBalanceInvariant::holds_for(&Board::from_cells([
            X, X, None, None, None, None, None, None, None
        ])));
    }
}

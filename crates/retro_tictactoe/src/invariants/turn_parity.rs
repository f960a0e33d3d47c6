//! Turn parity invariant: the turn flag agrees with the board.

use super::super::{Match, Player};
use super::Invariant;

/// Invariant: X is next exactly when both players have placed the same
/// number of marks.
pub struct TurnParityInvariant;

impl Invariant<Match> for TurnParityInvariant {
    fn holds(game: &Match) -> bool {
        let board = game.board();
        let balanced = board.count(Player::X) == board.count(Player::O);
        game.x_is_next() == balanced
    }

    fn description() -> &'static str {
        "X moves next exactly when mark counts are equal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_as_turns_alternate() {
        let mut game = Match::new();
        assert!(TurnParityInvariant::holds(&game));
        for index in [4, 0, 8] {
            game.apply_move(index);
            assert!(TurnParityInvariant::holds(&game));
        }
        assert_eq!(game.mover(), Player::O);
    }

    #[test]
    fn test_holds_after_rejected_move() {
        let mut game = Match::new();
        game.apply_move(4);
        game.apply_move(4);
        assert!(TurnParityInvariant::holds(&game));
    }
}

//! Derived round outcome and status text.
//!
//! Nothing here is stored. Both types are recomputed from the board and
//! turn flag whenever they are asked for.

use super::rules::{self, WinLine};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Outcome of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won {
        /// The winning player.
        player: Player,
        /// The first completed line in scan order.
        line: WinLine,
    },
    /// The board is full with no completed line.
    Draw,
}

impl RoundOutcome {
    /// Evaluates a board snapshot.
    pub fn of(board: &Board) -> Self {
        let info = rules::evaluate_winner(board);
        match (info.winner, info.line) {
            (Some(player), Some(line)) => RoundOutcome::Won { player, line },
            _ if rules::is_full(board) => RoundOutcome::Draw,
            _ => RoundOutcome::InProgress,
        }
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            RoundOutcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            RoundOutcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Returns true if the round ended in a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, RoundOutcome::Draw)
    }

    /// Returns true once the round accepts no more moves.
    pub fn is_over(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}

/// Status line shown to the players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// The round was won.
    #[display("Player {_0} wins!")]
    Won(Player),
    /// The round was drawn.
    #[display("It's a draw!")]
    Draw,
    /// The round continues with this mover.
    #[display("Next: {_0}")]
    Next(Player),
}

impl Status {
    /// Builds the status for an outcome and the player to move next.
    pub fn new(outcome: RoundOutcome, mover: Player) -> Self {
        match outcome {
            RoundOutcome::Won { player, .. } => Status::Won(player),
            RoundOutcome::Draw => Status::Draw,
            RoundOutcome::InProgress => Status::Next(mover),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);

    #[test]
    fn test_empty_board_in_progress() {
        let outcome = RoundOutcome::of(&Board::new());
        assert_eq!(outcome, RoundOutcome::InProgress);
        assert!(!outcome.is_over());
    }

    #[test]
    fn test_win_carries_line() {
        let board = Board::from_cells([O, X, X, O, X, None, O, None, None]);
        let outcome = RoundOutcome::of(&board);
        assert_eq!(outcome.winner(), Some(Player::O));
        assert!(outcome.line().is_some());
        assert!(outcome.is_over());
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = Board::from_cells([X, X, X, O, O, X, X, O, O]);
        assert_eq!(RoundOutcome::of(&board).winner(), Some(Player::X));
    }

    #[test]
    fn test_status_text() {
        assert_eq!(Status::Won(Player::O).to_string(), "Player O wins!");
        assert_eq!(Status::Draw.to_string(), "It's a draw!");
        assert_eq!(Status::Next(Player::X).to_string(), "Next: X");
    }
}

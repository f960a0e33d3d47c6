//! Read-only snapshot for the presentation layer.

use super::{Match, Player, Position, Score};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a front-end needs to render one frame of a match.
///
/// Built fresh from a [`Match`]; holding one never keeps derived state
/// alive past the next intent.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchView {
    /// Row-major cells, `None` for empty squares.
    cells: [Option<Player>; 9],
    /// Status line ("Player X wins!", "It's a draw!", "Next: O").
    status: String,
    /// Winner of the round, if any.
    winner: Option<Player>,
    /// Winning line as board indices, for highlighting.
    winning_line: Option<[usize; 3]>,
    /// Whether the round ended in a draw.
    draw: bool,
    /// Player to move next.
    mover: Player,
    /// Per-cell "disabled" flag: occupied or round over.
    disabled: [bool; 9],
    /// Cumulative score.
    score: Score,
}

impl MatchView {
    /// Returns true if the cell at `index` is part of the winning line.
    pub fn is_winning_cell(&self, index: usize) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&index))
    }
}

impl From<&Match> for MatchView {
    fn from(game: &Match) -> Self {
        let info = game.winner_info();
        Self {
            cells: game.board().cells(),
            status: game.status().to_string(),
            winner: info.winner,
            winning_line: info.indices(),
            draw: game.is_draw(),
            mover: game.mover(),
            disabled: Position::ALL.map(|pos| game.is_cell_disabled(pos)),
            score: *game.score(),
        }
    }
}

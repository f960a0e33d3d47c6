//! First-class intent and move-result types.
//!
//! Intents are what the presentation layer sends in. Move outcomes are what
//! the match reports back; they describe a transition and never fail.

use super::rules::WinLine;
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Intent {
    /// A cell was clicked. The index is unchecked; 0-8 is legal.
    #[display("cell {_0}")]
    Cell(usize),
    /// Clear the board and keep the score.
    #[display("new round")]
    NewRound,
    /// Clear the board and the score.
    #[display("reset match")]
    ResetMatch,
}

impl From<Position> for Intent {
    fn from(pos: Position) -> Self {
        Intent::Cell(pos.to_index())
    }
}

impl FromStr for Intent {
    type Err = ParseIntentError;

    /// Parses `new`, `reset`, a raw cell index, or a position label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if let Ok(index) = token.parse::<usize>() {
            return Ok(Intent::Cell(index));
        }
        match token.to_ascii_lowercase().as_str() {
            "new" | "new-round" => Ok(Intent::NewRound),
            "reset" | "reset-match" => Ok(Intent::ResetMatch),
            _ => Position::from_label(token)
                .map(Intent::from)
                .ok_or_else(|| ParseIntentError::new(token)),
        }
    }
}

/// Error for a token that names no intent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unrecognized intent '{token}' (expected 0-8, a position label, 'new' or 'reset')")]
pub struct ParseIntentError {
    /// The offending token.
    pub token: String,
}

impl ParseIntentError {
    /// Creates a parse error for `token`.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveRejection {
    /// The round already has a winner or is drawn.
    #[display("Round is already over")]
    RoundOver,
    /// The square is taken.
    #[display("Square {_0} is already occupied")]
    Occupied(Position),
    /// The index is outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(usize),
}

/// What happened when a move was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Mark placed; the round continues.
    Placed {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Mark placed and it completed a line.
    Won {
        /// Who moved and won.
        player: Player,
        /// Where.
        position: Position,
        /// The completed line.
        line: WinLine,
    },
    /// Mark placed and it filled the board without a line.
    Drawn {
        /// Who moved.
        player: Player,
        /// Where.
        position: Position,
    },
    /// Nothing changed.
    Ignored(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the board changed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }

    /// Returns true if this move ended the round.
    pub fn ends_round(&self) -> bool {
        matches!(self, MoveOutcome::Won { .. } | MoveOutcome::Drawn { .. })
    }

    /// The rejection reason for an ignored move.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Ignored(reason) => Some(*reason),
            _ => None,
        }
    }
}

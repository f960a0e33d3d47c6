//! Cumulative match score.

use super::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Wins per player and draws, accumulated across the rounds of a match.
///
/// Counters only grow; the whole score is replaced on a match reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    #[serde(rename = "X")]
    x: u32,
    /// Rounds won by O.
    #[serde(rename = "O")]
    o: u32,
    /// Rounds ending in a draw.
    draws: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounds won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Number of rounds that reached a result.
    pub fn rounds_completed(&self) -> u32 {
        self.x + self.o + self.draws
    }

    pub(crate) fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }

    pub(crate) fn record_draw(&mut self) {
        self.draws += 1;
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} | O {} | draws {}", self.x, self.o, self.draws)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records() {
        let mut score = Score::new();
        score.record_win(Player::O);
        score.record_win(Player::O);
        score.record_draw();
        assert_eq!(score.wins(Player::X), 0);
        assert_eq!(score.wins(Player::O), 2);
        assert_eq!(*score.draws(), 1);
        assert_eq!(score.rounds_completed(), 3);
    }

    #[test]
    fn test_display() {
        let mut score = Score::new();
        score.record_win(Player::X);
        assert_eq!(score.to_string(), "X 1 | O 0 | draws 0");
    }
}

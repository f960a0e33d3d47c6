//! Retro Tic Tac Toe - rules and scoring for local two-player matches.
//!
//! # Architecture
//!
//! - **Rules**: pure board evaluation (winner, winning line, draw)
//! - **Match**: round/match controller owning board, turn and score
//! - **Invariants**: properties checked after every accepted move
//! - **View**: serializable snapshot for whatever renders the match
//!
//! # Example
//!
//! ```
//! use retro_tictactoe::{Match, Player};
//!
//! let mut game = Match::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index);
//! }
//! assert_eq!(game.status().to_string(), "Player X wins!");
//! assert_eq!(game.winning_line(), Some([0, 1, 2]));
//! assert_eq!(game.score().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
pub mod invariants;
mod outcome;
mod position;
pub mod rules;
mod score;
mod types;
mod view;

pub use action::{Intent, MoveOutcome, MoveRejection, ParseIntentError};
pub use controller::Match;
pub use outcome::{RoundOutcome, Status};
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, WinnerInfo, evaluate_winner, is_draw, is_full};
pub use score::Score;
pub use types::{Board, Player, Square};
pub use view::MatchView;

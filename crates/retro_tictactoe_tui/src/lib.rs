//! Terminal front-end for Retro Tic Tac Toe.
//!
//! The front-end renders a [`retro_tictactoe::MatchView`] and forwards key
//! presses as intents. It holds no game rules of its own.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod replay;
pub mod ui;

pub use app::{App, Control};
pub use cli::{Cli, Command};
pub use config::{ConfigError, TuiConfig};

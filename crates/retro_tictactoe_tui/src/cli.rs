//! Command-line interface for retro_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Retro Tic Tac Toe - local two-player matches in the terminal
#[derive(Parser, Debug)]
#[command(name = "retro_tictactoe_tui")]
#[command(about = "Local two-player tic-tac-toe with a running scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, global = true, default_value = "retro_tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play a match in the terminal UI
    #[default]
    Play,

    /// Run a scripted list of intents and print the final board, status and score
    Replay {
        /// Intents in order: a cell index (0-8), a position label
        /// (e.g. "center"), "new" or "reset"
        #[arg(required = true)]
        intents: Vec<String>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::parse_from(["retro_tictactoe_tui"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Play);
        assert_eq!(cli.config, PathBuf::from("retro_tictactoe.toml"));
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::parse_from(["retro_tictactoe_tui", "replay", "0", "center", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                intents: vec!["0".to_string(), "center".to_string()],
                json: true,
            })
        );
    }
}

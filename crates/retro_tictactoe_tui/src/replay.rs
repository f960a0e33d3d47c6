//! Headless replay of a scripted intent list.

use anyhow::{Context, Result};
use retro_tictactoe::{Intent, Match, MoveOutcome};
use tracing::{info, instrument, warn};

/// Parses `tokens` into intents and dispatches them to a fresh match.
///
/// Ignored moves are logged and skipped, exactly as the interactive UI
/// would skip them.
#[instrument(skip(tokens), fields(count = tokens.len()))]
pub fn replay<S: AsRef<str>>(tokens: &[S]) -> Result<Match> {
    let intents = tokens
        .iter()
        .map(|token| token.as_ref().parse::<Intent>())
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to parse replay script")?;

    let mut game = Match::new();
    for intent in intents {
        if let Some(MoveOutcome::Ignored(reason)) = game.dispatch(intent) {
            warn!(%intent, %reason, "Intent ignored");
        }
    }

    info!(status = %game.status(), score = %game.score(), "Replay finished");
    Ok(game)
}

/// Plain-text summary: board grid, status line and score.
pub fn summary(game: &Match) -> String {
    format!(
        "{}\n\n{}\nScore: {}",
        game.board().display(),
        game.status(),
        game.score()
    )
}

/// Runs a replay and renders the result as text or pretty JSON.
pub fn run<S: AsRef<str>>(tokens: &[S], json: bool) -> Result<String> {
    let game = replay(tokens)?;
    if json {
        serde_json::to_string_pretty(&game.view()).context("Failed to serialize match view")
    } else {
        Ok(summary(&game))
    }
}

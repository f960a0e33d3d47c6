//! Retro Tic Tac Toe - terminal CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use retro_tictactoe_tui::{App, Cli, Command, Control, TuiConfig, replay, ui};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?;

    match cli.command.unwrap_or_default() {
        Command::Play => run_play(&config),
        Command::Replay { intents, json } => run_replay(&config, &intents, json),
    }
}

/// Builds the env filter, preferring `RUST_LOG` over the config file.
fn env_filter(config: &TuiConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Play a match in the terminal UI
fn run_play(config: &TuiConfig) -> Result<()> {
    // The UI owns stdout, so logs only go to a file.
    if let Some(path) = config.log_file() {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(env_filter(config))
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    info!("Starting Retro Tic Tac Toe");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.show_tips());
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!(error = %err, "UI loop failed");
    }
    info!("Exiting");
    res
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}

/// Run a scripted replay and print the result
fn run_replay(config: &TuiConfig, intents: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .init();

    let output = replay::run(intents, json)?;
    println!("{}", output);
    Ok(())
}

//! Stateless rendering of the match screen.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use retro_tictactoe::{MatchView, Player, Position};

const TITLE: &str = "Retro Tic Tac Toe";
const SUBTITLE: &str = "Local 2-player • First to 3 in a row";
const CONTROLS: &str = "1-9/arrows+Enter play • n new round • r reset score • q quit";
const TIP: &str = "Tip: Winner line lights up. Use \"n\" for a new round to keep the score going.";

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Scoreboard
            Constraint::Length(3), // Status
            Constraint::Min(11),   // Board
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_scoreboard(frame, chunks[1], &view);
    draw_status(frame, chunks[2], &view, app.notice());
    draw_board(frame, chunks[3], &view, app.cursor());

    let controls = Paragraph::new(CONTROLS)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[4]);

    if app.show_tips() {
        let footer = Paragraph::new(TIP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(footer, chunks[5]);
    }
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn draw_scoreboard(frame: &mut Frame, area: Rect, view: &MatchView) {
    let area = center_rect(area, 48, 3);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let score = view.score();
    let items = [
        ("PLAYER X", *score.x(), player_color(Player::X)),
        ("DRAWS", *score.draws(), Color::Yellow),
        ("PLAYER O", *score.o(), player_color(Player::O)),
    ];
    for ((label, value, color), col) in items.into_iter().zip(cols.iter()) {
        let item = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(label));
        frame.render_widget(item, *col);
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &MatchView, notice: Option<&str>) {
    let color = if view.winner().is_some() {
        Color::Green
    } else if *view.draw() {
        Color::Magenta
    } else {
        Color::Yellow
    };

    let mut spans = vec![Span::styled(
        view.status().clone(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    if let Some(notice) = notice {
        spans.push(Span::styled(
            format!("  ({})", notice),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, center_rect(area, 60, 3));
}

fn draw_board(frame: &mut Frame, area: Rect, view: &MatchView, cursor: Position) {
    let board_area = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, view, cursor, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, view: &MatchView, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for (col, area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_row_col(row, col) {
            draw_cell(frame, area, view, cursor, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(frame: &mut Frame, area: Rect, view: &MatchView, cursor: Position, pos: Position) {
    let index = pos.to_index();

    let (symbol, mut style) = match view.cells()[index] {
        None => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Some(player) => (
            player.to_string(),
            Style::default()
                .fg(player_color(player))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if view.is_winning_cell(index) {
        style = style.bg(Color::Yellow).fg(Color::Black);
    } else if view.disabled()[index] && view.cells()[index].is_none() {
        style = style.add_modifier(Modifier::DIM);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    // Vertically center the mark in the three-line cell.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

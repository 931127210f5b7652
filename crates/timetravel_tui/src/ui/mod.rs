//! UI rendering using ratatui.

pub mod board;
pub mod moves;

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::Status;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    /// Title bar.
    pub title: Rect,
    /// Board panel.
    pub board: Rect,
    /// Move list panel.
    pub moves: Rect,
    /// Status line.
    pub status: Rect,
    /// Key help, when shown.
    pub help: Option<Rect>,
}

/// Splits the terminal area. Shared by drawing and mouse hit-testing.
pub fn layout(area: Rect, show_help: bool) -> UiLayout {
    let help_height = if show_help { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
            Constraint::Length(help_height),
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    UiLayout {
        title: chunks[0],
        board: body[0],
        moves: body[1],
        status: chunks[2],
        help: show_help.then_some(chunks[3]),
    }
}

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &mut App) {
    let regions = layout(f.area(), app.show_help());

    let title = Paragraph::new("Time-Travel Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, regions.title);

    board::render_board(f, regions.board, app);
    moves::render_moves(f, regions.moves, app);

    let game = app.game();
    let status = game.status();
    let color = match status {
        Status::Winner(_) => Color::Green,
        Status::Draw => Color::Magenta,
        Status::NextTurn(_) => Color::Yellow,
    };
    let mut spans = vec![Span::styled(
        status.to_string(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )];
    let last = game.snapshot_count() - 1;
    if game.current_move() < last {
        spans.push(Span::styled(
            format!("  (viewing move #{} of {})", game.current_move(), last),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let status = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, regions.status);

    if let Some(help_area) = regions.help {
        let help = Paragraph::new(
            "1-9/Enter: play | Tab: board/moves | Enter: jump | r: reverse | n: new | ?: help | q: quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        f.render_widget(help, help_area);
    }
}

//! Move list rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
};
use timetravel_tictactoe::Game;

fn panel(app: &App) -> Block<'static> {
    let order = if app.game().is_reversed() {
        "newest first"
    } else {
        "oldest first"
    };
    let border = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!("Moves ({})", order))
}

/// Renders the move list, marking the current and selected entries.
///
/// The list state lives on the app so hit-testing sees the same scroll
/// offset the user sees.
pub fn render_moves(f: &mut Frame, area: Rect, app: &mut App) {
    let entries = app.game().move_descriptions();
    let selected_row = entries
        .iter()
        .position(|e| *e.move_number() == app.selected_move());

    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            let style = if *entry.is_current() {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(entry.to_string()).style(style)
        })
        .collect();

    let highlight = if app.focus() == Focus::Moves {
        Style::default().bg(Color::DarkGray)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(panel(app))
        .highlight_style(highlight);

    let state = app.move_list_mut();
    state.select(selected_row);
    f.render_stateful_widget(list, area, state);
}

/// Move number of the list row at screen `row`, if any.
///
/// `offset` is the first visible entry, taken from the list state the
/// panel was last drawn with.
pub fn entry_at(
    area: Rect,
    game: &Game,
    offset: usize,
    column: u16,
    row: u16,
) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if column < inner.x || column >= inner.x + inner.width || row < inner.y {
        return None;
    }
    let visible_row = usize::from(row - inner.y);
    if visible_row >= usize::from(inner.height) {
        return None;
    }
    game.move_descriptions()
        .get(offset + visible_row)
        .map(|entry| *entry.move_number())
}

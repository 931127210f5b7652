//! Tic-tac-toe board rendering.

use crate::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use timetravel_tictactoe::{Player, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

fn panel() -> Block<'static> {
    Block::default().borders(Borders::ALL).title("Board")
}

/// Screen rectangles of the nine cells, in board order.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(panel().inner(area), BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = row_columns(row);
        for (c, col) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = col;
        }
    }
    cells
}

/// Board square under the screen cell at `column`, `row`.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    board_cells(area)
        .iter()
        .position(|cell| {
            column >= cell.x
                && column < cell.x + cell.width
                && row >= cell.y
                && row < cell.y + cell.height
        })
        .and_then(Position::from_index)
}

/// Renders the board with cursor and winning-line highlight.
pub fn render_board(f: &mut Frame, area: Rect, app: &App) {
    f.render_widget(panel(), area);

    let board = app.game().current_board();
    let winning_line = app.game().winning_line();
    let cursor = (app.focus() == Focus::Board).then_some(app.cursor());
    // No more squares to pick once the game is decided.
    let finished = app.game().status().is_over();
    let cells = board_cells(area);

    for pos in Position::ALL {
        let highlight = if cursor == Some(pos) {
            Some(Color::White)
        } else if winning_line.is_some_and(|line| line.contains(&pos)) {
            Some(Color::Green)
        } else {
            None
        };
        let hint = (!finished).then_some(pos.to_index() + 1);
        render_square(f, cells[pos.to_index()], board.get(pos), hint, highlight);
    }

    let rows = row_separators(&cells);
    for sep in rows {
        render_separator(f, sep);
    }
    for sep in column_separators(&cells) {
        render_vertical_sep(f, sep);
    }
}

fn row_columns(area: Rect) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area)
}

fn row_separators(cells: &[Rect; 9]) -> [Rect; 2] {
    let left = cells[0].x;
    let width = cells[2].x + cells[2].width - left;
    [
        Rect::new(left, cells[0].y + cells[0].height, width, 1),
        Rect::new(left, cells[3].y + cells[3].height, width, 1),
    ]
}

fn column_separators(cells: &[Rect; 9]) -> Vec<Rect> {
    cells
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 != 2)
        .map(|(_, cell)| Rect::new(cell.x + cell.width, cell.y, 1, cell.height))
        .collect()
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    square: Square,
    hint: Option<usize>,
    highlight: Option<Color>,
) {
    let (text, style) = match square {
        Square::Empty => (
            hint.map(|n| n.to_string()).unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };
    let style = match highlight {
        Some(bg) => style.bg(bg).fg(Color::Black),
        None => style,
    };

    let lines = vec![Line::from(""), Line::from(text), Line::from("")];
    let paragraph = Paragraph::new(lines).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}

//! Application state and input handling.

use crate::config::TuiConfig;
use crate::input::{digit_to_index, move_cursor};
use crate::ui;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{layout::Rect, widgets::ListState};
use timetravel_tictactoe::{Game, Position};
use tracing::{debug, instrument, warn};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    Board,
    /// Arrow keys select a move list entry.
    Moves,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    move_list: ListState,
    show_help: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &TuiConfig) -> Self {
        let mut game = Game::new();
        if *config.start_reversed() {
            game.toggle_display_order();
        }
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            move_list: ListState::default(),
            show_help: *config.show_help(),
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move number highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Move list scroll and selection state, kept across frames.
    pub fn move_list_mut(&mut self) -> &mut ListState {
        &mut self.move_list
    }

    /// Whether the help bar is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if let Some(index) = digit_to_index(key.code) {
            self.play(index);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::Moves,
                    Focus::Moves => Focus::Board,
                };
            }
            KeyCode::Char('r') => self.game.toggle_display_order(),
            KeyCode::Char('n') => self.restart(),
            KeyCode::Char('?') => self.show_help = !self.show_help,
            code => match self.focus {
                Focus::Board => match code {
                    KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
                    other => self.cursor = move_cursor(self.cursor, other),
                },
                Focus::Moves => match code {
                    KeyCode::Up | KeyCode::Char('k') => self.step_selection(false),
                    KeyCode::Down | KeyCode::Char('j') => self.step_selection(true),
                    KeyCode::Enter | KeyCode::Char(' ') => self.jump(self.selected_move),
                    _ => {}
                },
            },
        }
    }

    /// Handles a mouse event; `area` is the full frame area.
    #[instrument(skip(self))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let regions = ui::layout(area, self.show_help);
        if let Some(pos) = ui::board::cell_at(regions.board, mouse.column, mouse.row) {
            self.focus = Focus::Board;
            self.cursor = pos;
            self.play(pos.to_index());
        } else if let Some(move_number) = ui::moves::entry_at(
            regions.moves,
            &self.game,
            self.move_list.offset(),
            mouse.column,
            mouse.row,
        ) {
            self.focus = Focus::Moves;
            self.jump(move_number);
        }
    }

    fn play(&mut self, index: usize) {
        self.game.play(index);
        self.selected_move = self.game.current_move();
    }

    fn jump(&mut self, move_number: usize) {
        match self.game.jump_to(move_number) {
            Ok(()) => self.selected_move = move_number,
            Err(e) => warn!(error = %e, "Jump rejected"),
        }
    }

    /// Moves the selection one row down (or up) in display order.
    fn step_selection(&mut self, down: bool) {
        let entries = self.game.move_descriptions();
        let Some(row) = entries
            .iter()
            .position(|e| *e.move_number() == self.selected_move)
        else {
            return;
        };
        let next = if down {
            (row + 1).min(entries.len() - 1)
        } else {
            row.saturating_sub(1)
        };
        self.selected_move = *entries[next].move_number();
    }

    fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = Position::Center;
        self.selected_move = 0;
        self.move_list = ListState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetravel_tictactoe::{Player, Status};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&TuiConfig::default())
    }

    #[test]
    fn test_digits_play() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.game().current_move(), 2);
        assert_eq!(app.selected_move(), 2);
        assert_eq!(app.game().status(), Status::NextTurn(Player::X));
    }

    #[test]
    fn test_cursor_and_enter_play() {
        let mut app = app();
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.cursor(), Position::TopLeft);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().clicks()[1], Some(Position::TopLeft));
    }

    #[test]
    fn test_move_list_navigation_and_jump() {
        let mut app = app();
        for c in ['1', '2', '3'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Moves);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_move(), 1);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().current_move(), 1);
        assert_eq!(app.game().snapshot_count(), 4);

        // Playing from the past drops the old future.
        app.handle_key(key(KeyCode::Char('9')));
        assert_eq!(app.game().snapshot_count(), 3);
        assert_eq!(app.selected_move(), 2);
    }

    #[test]
    fn test_navigation_follows_reversed_order() {
        let mut app = app();
        for c in ['1', '2'] {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Char('r')));
        app.handle_key(key(KeyCode::Tab));
        // Newest first: move 2 is on top, Down goes back in time.
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.selected_move(), 1);
        app.handle_key(key(KeyCode::Up));
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected_move(), 2);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('5')));
        assert_eq!(app.game().current_move(), 1);
    }

    #[test]
    fn test_restart_and_quit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('5')));
        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.game().snapshot_count(), 1);
        assert_eq!(app.selected_move(), 0);
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_start_reversed_from_config() {
        let cli = crate::cli::Cli {
            reversed: true,
            ..Default::default()
        };
        let config = TuiConfig::default().with_overrides(&cli);
        assert!(App::new(&config).game().is_reversed());
    }

    #[test]
    fn test_mouse_click_plays_square() {
        let mut app = app();
        let area = Rect::new(0, 0, 100, 30);
        let regions = ui::layout(area, app.show_help());
        let cell = ui::board::board_cells(regions.board)[8];
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: cell.x + 1,
                row: cell.y + 1,
                modifiers: KeyModifiers::NONE,
            },
            area,
        );
        assert_eq!(app.game().clicks()[1], Some(Position::BottomRight));
        assert_eq!(app.cursor(), Position::BottomRight);
    }

    #[test]
    fn test_mouse_click_jumps_in_move_list() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('1')));
        app.handle_key(key(KeyCode::Char('2')));
        let area = Rect::new(0, 0, 100, 30);
        let regions = ui::layout(area, app.show_help());
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: regions.moves.x + 2,
                row: regions.moves.y + 1,
                modifiers: KeyModifiers::NONE,
            },
            area,
        );
        assert_eq!(app.game().current_move(), 0);
        assert_eq!(app.focus(), Focus::Moves);
    }
}

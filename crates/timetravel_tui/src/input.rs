//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timetravel_tictactoe::{Coordinates, Position};

/// Moves cursor based on arrow keys (or vi-style `hjkl`).
///
/// The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let Coordinates { row, col } = cursor.coordinates();
    let (row, col) = match key {
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => (row + 1, col),
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, col + 1),
        _ => return cursor,
    };
    Position::from_coordinates(Coordinates { row, col }).unwrap_or(cursor)
}

/// Board index for a digit key `1`-`9`.
pub fn digit_to_index(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
        _ => None,
    }
}

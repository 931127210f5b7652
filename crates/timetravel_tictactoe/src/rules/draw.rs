//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// This says nothing about winners: a full board with a completed line
/// is a win. [`crate::Game::status`] checks for a winner first.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

//! Move application.

use super::super::{Board, GameError, Player, Position, Square};
use super::win::calculate_winner;
use tracing::{instrument, trace};

/// Places `player`'s mark at `position`, returning the new board.
///
/// The input board is never modified. Fails when the game on `board`
/// is already decided or the square is taken; the decided check runs
/// first. Turn order is the caller's business.
#[instrument]
pub fn apply_move(board: &Board, position: Position, player: Player) -> Result<Board, GameError> {
    if let Some(win) = calculate_winner(board) {
        return Err(GameError::GameDecided { winner: win.player });
    }

    if !board.is_empty(position) {
        return Err(GameError::SquareOccupied { position });
    }

    let next = board.with(position, Square::Occupied(player));
    trace!(%position, %player, "Move applied");
    Ok(next)
}

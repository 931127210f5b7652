//! Entries of the move list shown beside the board.

use super::{Coordinates, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who played a move and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveDetail {
    /// The player who made the move.
    player: Player,
    /// The square that was played.
    position: Position,
    /// One-based coordinates of that square.
    coordinates: Coordinates,
}

impl MoveDetail {
    /// Creates the detail for the move arriving at snapshot `move_number`.
    ///
    /// Snapshot 1 is X's first move, so odd snapshots belong to X.
    pub fn new(move_number: usize, position: Position) -> Self {
        let player = if move_number % 2 == 1 {
            Player::X
        } else {
            Player::O
        };
        Self {
            player,
            position,
            coordinates: position.coordinates(),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveEntry {
    /// Index of the snapshot this entry jumps to.
    move_number: usize,
    /// Jump label, e.g. `Go to move #3`.
    label: String,
    /// Whether this snapshot is the one on the board.
    is_current: bool,
    /// Present for every snapshot except game start.
    detail: Option<MoveDetail>,
}

impl MoveEntry {
    /// Builds the entry for snapshot `move_number`.
    pub fn new(move_number: usize, is_current: bool, click: Option<Position>) -> Self {
        let label = if move_number == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", move_number)
        };
        Self {
            move_number,
            label,
            is_current,
            detail: click.map(|pos| MoveDetail::new(move_number, pos)),
        }
    }
}

impl std::fmt::Display for MoveEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_current {
            write!(f, "You are at move #{}", self.move_number)?;
        } else {
            f.write_str(&self.label)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, " -- Player: {} {}", detail.player, detail.coordinates)?;
        }
        Ok(())
    }
}

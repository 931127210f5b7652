//! Error types for the rules engine and game container.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// The two broad classes of failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum ErrorKind {
    /// A move that the rules forbid. Swallowed by [`crate::Game::play`].
    #[display("illegal move")]
    IllegalMove,
    /// An index outside the board or outside the recorded history.
    #[display("out of range")]
    OutOfRange,
}

/// Error that can occur when applying a move or navigating history.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// The square at the position is already occupied.
    #[display("Square {position} is already occupied")]
    SquareOccupied {
        /// The square that was targeted.
        position: Position,
    },

    /// The board already has a completed line.
    #[display("Game is already won by {winner}")]
    GameDecided {
        /// Owner of the completed line.
        winner: Player,
    },

    /// An index was absent or outside `0..len`.
    #[display("Index {index:?} is out of range 0..{len}")]
    OutOfRange {
        /// The offending index, `None` when no index was supplied.
        index: Option<usize>,
        /// Exclusive upper bound that was expected.
        len: usize,
    },
}

impl GameError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::SquareOccupied { .. } | GameError::GameDecided { .. } => {
                ErrorKind::IllegalMove
            }
            GameError::OutOfRange { .. } => ErrorKind::OutOfRange,
        }
    }

    /// True for errors the container swallows.
    pub fn is_illegal_move(&self) -> bool {
        self.kind() == ErrorKind::IllegalMove
    }
}

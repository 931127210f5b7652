//! Typed board positions and their human-facing coordinates.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

/// One-based row and column of a square, as shown to players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    /// Row, 1 (top) to 3 (bottom).
    pub row: usize,
    /// Column, 1 (left) to 3 (right).
    pub col: usize,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Col: {} Row: {}", self.col, self.row)
    }
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row and column of this position, both 1-based.
    pub fn coordinates(self) -> Coordinates {
        let index = self.to_index();
        Coordinates {
            row: index / 3 + 1,
            col: index % 3 + 1,
        }
    }

    /// Position at 1-based `row` and `col`, if both are in 1..=3.
    pub fn from_coordinates(coords: Coordinates) -> Option<Self> {
        if !(1..=3).contains(&coords.row) || !(1..=3).contains(&coords.col) {
            return None;
        }
        Self::from_index((coords.row - 1) * 3 + (coords.col - 1))
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};
    use strum::IntoEnumIterator;

    #[test]
    fn test_index_roundtrip_matches_declaration_order() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_coordinates_are_one_based() {
        assert_eq!(Position::TopLeft.coordinates(), Coordinates { row: 1, col: 1 });
        assert_eq!(Position::Center.coordinates(), Coordinates { row: 2, col: 2 });
        assert_eq!(Position::TopRight.coordinates(), Coordinates { row: 1, col: 3 });
        assert_eq!(Position::BottomLeft.coordinates(), Coordinates { row: 3, col: 1 });
    }

    #[test]
    fn test_from_coordinates_rejects_zero() {
        assert_eq!(Position::from_coordinates(Coordinates { row: 0, col: 1 }), None);
        assert_eq!(Position::from_coordinates(Coordinates { row: 3, col: 4 }), None);
        assert_eq!(
            Position::from_coordinates(Coordinates { row: 3, col: 3 }),
            Some(Position::BottomRight)
        );
    }

    #[test]
    fn test_valid_moves_skip_occupied() {
        let board = Board::new().with(Position::Center, Square::Occupied(Player::O));
        let moves = Position::valid_moves(&board);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Position::Center));
    }
}

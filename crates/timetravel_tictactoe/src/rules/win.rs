//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in evaluation order.
///
/// Rows top to bottom, columns left to right, then the `\` diagonal,
/// then the `/` diagonal. [`calculate_winner`] reports the first
/// complete line in this order.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player with three in a row.
    pub player: Player,
    /// The three squares of the line.
    pub line: [Position; 3],
}

impl Win {
    /// The line as raw board indices.
    pub fn indices(&self) -> [usize; 3] {
        self.line.map(Position::to_index)
    }

    /// Whether `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// The winning lines in evaluation order.
pub fn winning_lines() -> &'static [[Position; 3]; 8] {
    &LINES
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`winning_lines`] order,
/// `None` otherwise.
#[instrument]
pub fn calculate_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(Win {
                player,
                line: [a, b, c],
            }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(line: [Position; 3], player: Player) -> Board {
        line.iter()
            .fold(Board::new(), |b, &pos| b.with(pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for &line in winning_lines() {
            for player in [Player::X, Player::O] {
                let win = calculate_winner(&fill(line, player)).expect("line should win");
                assert_eq!(win.player, player);
                assert_eq!(win.line, line);
            }
        }
    }

    #[test]
    fn test_winner_diagonal_indices() {
        let board = fill(
            [Position::TopRight, Position::Center, Position::BottomLeft],
            Player::O,
        );
        let win = calculate_winner(&board).unwrap();
        assert_eq!(win.indices(), [2, 4, 6]);
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X));
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::O))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(calculate_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_on_malformed_board() {
        let board = fill(
            [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
            Player::O,
        )
        .with(Position::TopLeft, Square::Occupied(Player::X))
        .with(Position::TopCenter, Square::Occupied(Player::X))
        .with(Position::TopRight, Square::Occupied(Player::X));
        let win = calculate_winner(&board).unwrap();
        assert_eq!(win.player, Player::X);
        assert_eq!(win.indices(), [0, 1, 2]);

        // Every line is complete; the top row still comes first.
        let all_o = Position::ALL
            .iter()
            .fold(Board::new(), |b, &pos| b.with(pos, Square::Occupied(Player::O)));
        assert_eq!(calculate_winner(&all_o).unwrap().indices(), [0, 1, 2]);
    }
}

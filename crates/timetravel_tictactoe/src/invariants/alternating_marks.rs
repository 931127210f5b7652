//! Alternating marks invariant: X plays odd snapshots, O even ones.

use super::super::{Game, Player, Square};
use super::Invariant;

/// Invariant: the mark placed to reach snapshot `k` belongs to X when
/// `k` is odd and to O when `k` is even.
pub struct AlternatingMarksInvariant;

impl Invariant<Game> for AlternatingMarksInvariant {
    fn holds(game: &Game) -> bool {
        game.history()
            .iter()
            .zip(game.clicks())
            .enumerate()
            .skip(1)
            .all(|(k, (board, click))| {
                let expected = if k % 2 == 1 { Player::X } else { Player::O };
                click.is_some_and(|pos| board.get(pos) == Square::Occupied(expected))
            })
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_alternation_holds() {
        let mut game = Game::new();
        for i in [0, 1, 2, 3] {
            game.play(i);
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = Game::new();
        game.play(0);
        let wrong = game.history[1].with(Position::Center, Square::Occupied(Player::X));
        game.history.push(wrong);
        game.clicks.push(Some(Position::Center));
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}

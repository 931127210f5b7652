//! Single-step invariant: each snapshot adds exactly one mark.

use super::super::{Game, Position, Square};
use super::Invariant;

/// Invariant: snapshot `k` differs from snapshot `k - 1` in exactly one
/// square, that square was empty before, and it is the square recorded
/// in the click log for `k`.
pub struct SingleStepInvariant;

impl Invariant<Game> for SingleStepInvariant {
    fn holds(game: &Game) -> bool {
        if game.history().first().is_none_or(|b| b.occupied() != 0) {
            return false;
        }

        game.history().windows(2).enumerate().all(|(k, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let changed: Vec<Position> = Position::ALL
                .iter()
                .copied()
                .filter(|&pos| before.get(pos) != after.get(pos))
                .collect();
            match changed.as_slice() {
                [pos] => {
                    before.get(*pos) == Square::Empty
                        && game.clicks().get(k + 1) == Some(&Some(*pos))
                }
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, at the clicked square"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn test_empty_game_holds() {
        assert!(SingleStepInvariant::holds(&Game::new()));
    }

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for i in [4, 0, 8] {
            game.play(i);
        }
        assert!(SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = Game::new();
        game.play(4);
        let overwrite = game.history[1].with(Position::Center, Square::Occupied(Player::O));
        game.history.push(overwrite);
        game.clicks.push(Some(Position::Center));
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_click_mismatch_violates() {
        let mut game = Game::new();
        game.play(4);
        game.clicks[1] = Some(Position::TopLeft);
        assert!(!SingleStepInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = Game::new();
        game.history[0] = Board::new().with(Position::TopLeft, Square::Occupied(Player::X));
        assert!(!SingleStepInvariant::holds(&game));
    }
}

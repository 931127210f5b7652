//! Click log and pointer invariants.

use super::super::Game;
use super::Invariant;

/// Invariant: the click log runs parallel to history.
///
/// Same length, `None` only for game start.
pub struct ParallelClickLogInvariant;

impl Invariant<Game> for ParallelClickLogInvariant {
    fn holds(game: &Game) -> bool {
        let clicks = game.clicks();
        clicks.len() == game.history().len()
            && clicks.first() == Some(&None)
            && clicks.iter().skip(1).all(Option::is_some)
    }

    fn description() -> &'static str {
        "Click log is parallel to history"
    }
}

/// Invariant: the current move points into history.
pub struct CurrentMoveInBoundsInvariant;

impl Invariant<Game> for CurrentMoveInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.current_move() < game.history().len()
    }

    fn description() -> &'static str {
        "Current move is within history"
    }
}

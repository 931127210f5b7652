//! Tic-tac-toe with move history and time travel.
//!
//! The crate is split into a pure rules engine ([`rules`]) and a single
//! state container ([`Game`]) that owns the board snapshots. Presentation
//! lives elsewhere: frontends call [`Game::play`], [`Game::jump_to`] and
//! [`Game::toggle_display_order`], and read back [`Game::status`],
//! [`Game::move_descriptions`], [`Game::current_board`] and
//! [`Game::winning_line`].

#![warn(missing_docs)]

mod error;
mod game;
pub mod invariants;
mod moves;
mod position;
pub mod rules;
mod types;

pub use error::{ErrorKind, GameError};
pub use game::{Game, Status};
pub use moves::{MoveDetail, MoveEntry};
pub use position::{Coordinates, Position};
pub use rules::{Win, apply_move, calculate_winner, index_to_row_col, is_draw};
pub use types::{Board, Player, Square};

//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Rules are separated from history
//! storage so the container only ever asks questions and receives
//! fresh boards back.

pub mod apply;
pub mod coords;
pub mod draw;
pub mod win;

pub use apply::apply_move;
pub use coords::index_to_row_col;
pub use draw::is_draw;
pub use win::{Win, calculate_winner, winning_lines};

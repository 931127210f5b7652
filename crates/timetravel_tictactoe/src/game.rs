//! The game state container: history, time travel and derived status.

use super::moves::MoveEntry;
use super::rules::{apply_move, calculate_winner, is_draw};
use super::{Board, GameError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Status of the board currently on display.
///
/// Always derived from the board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// A player has completed a line.
    Winner(Player),
    /// The board is full with no completed line.
    Draw,
    /// The game continues; this player moves next.
    NextTurn(Player),
}

impl Status {
    /// True once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, Status::NextTurn(_))
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => write!(f, "Draw"),
            Status::NextTurn(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// A tic-tac-toe session with full move history.
///
/// `history[0]` is the empty board and every later snapshot adds exactly
/// one mark. `clicks` runs parallel to `history` and records the square
/// played to reach each snapshot. Jumping back and then playing discards
/// the abandoned future.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) history: Vec<Board>,
    pub(crate) clicks: Vec<Option<Position>>,
    pub(crate) current_move: usize,
    pub(crate) reversed: bool,
}

impl Game {
    /// Creates a new game at the empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            clicks: vec![None],
            current_move: 0,
            reversed: false,
        }
    }

    /// Plays the square at `index` for whoever is to move.
    ///
    /// Illegal moves (occupied square, finished game) and indices off the
    /// board are ignored and leave the game untouched.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play(&mut self, index: usize) {
        match self.try_play(index) {
            Ok(()) => {}
            Err(e) if e.is_illegal_move() => debug!(error = %e, "Ignoring illegal move"),
            Err(e) => warn!(error = %e, "Ignoring move off the board"),
        }
    }

    /// Like [`Game::play`], but reports why a move was refused.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn try_play(&mut self, index: usize) -> Result<(), GameError> {
        let position = Position::from_index(index).ok_or(GameError::OutOfRange {
            index: Some(index),
            len: Position::ALL.len(),
        })?;
        self.play_at(position)
    }

    /// Plays a typed position for whoever is to move.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_at(&mut self, position: Position) -> Result<(), GameError> {
        let player = self.to_move();
        let next = apply_move(self.current_board(), position, player)?;

        let keep = self.current_move + 1;
        if keep < self.history.len() {
            debug!(
                discarded = self.history.len() - keep,
                "Discarding abandoned future"
            );
        }
        self.history.truncate(keep);
        self.clicks.truncate(keep);
        self.history.push(next);
        self.clicks.push(Some(position));
        self.current_move = self.history.len() - 1;

        debug!(%player, %position, move_number = self.current_move, "Move played");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(())
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use super::invariants::{GameInvariants, InvariantSet};

        if let Err(violations) = GameInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("History invariant violated: {}", descriptions);
        }
    }

    /// Moves the board to snapshot `move_number`.
    ///
    /// History is kept; the next move played from here replaces
    /// everything after `move_number`.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn jump_to(&mut self, move_number: usize) -> Result<(), GameError> {
        if move_number >= self.history.len() {
            warn!(len = self.history.len(), "Jump target outside history");
            return Err(GameError::OutOfRange {
                index: Some(move_number),
                len: self.history.len(),
            });
        }
        self.current_move = move_number;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_display_order(&mut self) {
        self.reversed = !self.reversed;
        debug!(reversed = self.reversed, "Display order toggled");
    }

    /// Starts over with an empty board, keeping the display order.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        let reversed = self.reversed;
        *self = Self::new();
        self.reversed = reversed;
    }

    /// Status of the current board.
    #[instrument(skip(self))]
    pub fn status(&self) -> Status {
        let board = self.current_board();
        if let Some(win) = calculate_winner(board) {
            Status::Winner(win.player)
        } else if is_draw(board) {
            Status::Draw
        } else {
            Status::NextTurn(self.to_move())
        }
    }

    /// One entry per snapshot, in display order.
    #[instrument(skip(self))]
    pub fn move_descriptions(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = (0..self.history.len())
            .map(|m| {
                let click = self.clicks.get(m).copied().flatten();
                MoveEntry::new(m, m == self.current_move, click)
            })
            .collect();
        if self.reversed {
            entries.reverse();
        }
        entries
    }

    /// The snapshot currently on display.
    pub fn current_board(&self) -> &Board {
        &self.history[self.current_move]
    }

    /// Squares to highlight, if the current board is won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        calculate_winner(self.current_board()).map(|win| win.line)
    }

    /// Player whose turn it is at the current snapshot.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.current_move)
    }

    /// All snapshots, game start first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Square played to reach each snapshot; `None` for game start.
    pub fn clicks(&self) -> &[Option<Position>] {
        &self.clicks
    }

    /// Index of the snapshot on display.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Number of snapshots, game start included.
    pub fn snapshot_count(&self) -> usize {
        self.history.len()
    }

    /// Whether the move list is shown newest first.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

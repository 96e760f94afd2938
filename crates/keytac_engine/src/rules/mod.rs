//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board and the last move. Only lines through the
//! last move can have changed, so evaluation never rescans the board.

pub mod draw;
pub mod win;

pub use draw::board_exhausted;
pub use win::{scan_winner, winner_through};

use crate::phases::GameOutcome;
use crate::types::{Board, Cell};
use tracing::instrument;

/// Evaluates the board after a placement at `last_move`.
///
/// A win takes precedence over a tie on the ninth move.
#[instrument(level = "debug", skip(board), ret)]
pub fn evaluate(board: &Board, last_move: Cell, move_count: u8) -> GameOutcome {
    if let Some(player) = winner_through(board, last_move) {
        GameOutcome::Win(player)
    } else if board_exhausted(move_count) {
        GameOutcome::Tie
    } else {
        GameOutcome::InProgress
    }
}

//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::state::GameState;
use crate::types::{Board, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replays the snapshot log from an empty board: every snapshot must add
/// exactly one mark, on an empty cell, and the last snapshot must equal the
/// live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for snapshot in game.replay() {
            let placement = snapshot.placement();
            if !reconstructed.is_empty(placement.cell) {
                return false;
            }
            reconstructed.set(placement.cell, Square::Occupied(placement.player));
            if reconstructed != *snapshot.board() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

//! Placement events and the move error.

use crate::types::{Cell, Player};
use derive_new::new;
use serde::Serialize;

/// A successful placement: `player` put their mark on `cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, new)]
pub struct Placement {
    /// The player who moved.
    pub player: Player,
    /// The cell that was filled.
    pub cell: Cell,
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.cell)
    }
}

/// Why a select was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell under the cursor already holds a mark.
    #[display("Cell {cell} is already occupied")]
    CellOccupied {
        /// The occupied cell.
        cell: Cell,
    },
}

//! Cursor movement for keyboard navigation.

use crate::types::Cell;
use serde::Serialize;
use tracing::instrument;

/// A directional input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// The highlighted cell. Independent of what the cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cursor {
    cell: Cell,
}

impl Cursor {
    /// Creates a cursor on the center cell.
    pub fn new() -> Self {
        Self::at(Cell::CENTER)
    }

    /// Creates a cursor on the given cell.
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    /// Returns the highlighted cell.
    pub fn cell(self) -> Cell {
        self.cell
    }

    /// Returns the cursor moved one step in `direction`.
    ///
    /// Steps past an edge saturate; the cursor never wraps.
    #[instrument(level = "trace")]
    pub fn stepped(self, direction: Direction) -> Self {
        let (row, col) = (self.cell.row(), self.cell.col());
        let cell = match direction {
            Direction::Up => Cell::clamped(row.saturating_sub(1), col),
            Direction::Down => Cell::clamped(row + 1, col),
            Direction::Left => Cell::clamped(row, col.saturating_sub(1)),
            Direction::Right => Cell::clamped(row, col + 1),
        };
        Self { cell }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

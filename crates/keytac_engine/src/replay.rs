//! Append-only log of board snapshots.
//!
//! One [`Snapshot`] is recorded per successful placement. Nothing in the
//! game loop reads it back; it exists so replay or undo can be built on top
//! without reconstructing history.

use crate::action::Placement;
use crate::types::Board;
use derive_getters::Getters;
use serde::Serialize;

/// The full board immediately after a placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct Snapshot {
    /// The placement that produced this board.
    placement: Placement,
    /// The board after the placement.
    board: Board,
}

/// Ordered, immutable sequence of snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReplayLog {
    snapshots: Vec<Snapshot>,
}

impl ReplayLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot of `board` taken after `placement`.
    pub(crate) fn record(&mut self, placement: Placement, board: &Board) {
        self.snapshots.push(Snapshot {
            placement,
            board: board.clone(),
        });
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates over the snapshots, oldest first.
    pub fn iter(&self) -> std::slice::Iter<'_, Snapshot> {
        self.snapshots.iter()
    }

    /// The snapshot taken after placement number `index` (0-based).
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// The most recent snapshot.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    /// The placements in the order they were made.
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.snapshots.iter().map(|snapshot| snapshot.placement)
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Returns true if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReplayLog {
    type Item = &'a Snapshot;
    type IntoIter = std::slice::Iter<'a, Snapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

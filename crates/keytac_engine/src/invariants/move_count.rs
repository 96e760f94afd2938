//! Move count invariant: the counter, the board, and the log agree.

use super::Invariant;
use crate::rules::draw::MAX_MOVES;
use crate::state::GameState;

/// Invariant: Move count equals occupied squares equals snapshots recorded.
pub struct MoveCountInvariant;

impl Invariant<GameState> for MoveCountInvariant {
    fn holds(game: &GameState) -> bool {
        let count = game.move_count();
        count <= MAX_MOVES
            && usize::from(count) == game.board().occupied_count()
            && usize::from(count) == game.replay().len()
    }

    fn description() -> &'static str {
        "Move count matches occupied squares and replay length"
    }
}

//! Alternating turn invariant: consecutive placements come from different players.

use super::Invariant;
use crate::state::GameState;

/// Invariant: Players alternate turns.
///
/// No player appears twice in a row in the placement log, and the player to
/// move is the opponent of whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let placements: Vec<_> = game.replay().placements().collect();

        if placements
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        match placements.last() {
            Some(last) => game.turn() == last.player.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}

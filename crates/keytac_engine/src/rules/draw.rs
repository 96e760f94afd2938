//! Tie detection logic for tic-tac-toe.

/// Total number of placements a game can hold.
pub const MAX_MOVES: u8 = 9;

/// Checks if every square has been filled.
///
/// A full board with no winner through the last move is a tie.
pub fn board_exhausted(move_count: u8) -> bool {
    move_count >= MAX_MOVES
}

//! The game-state engine.

use crate::action::Placement;
use crate::cursor::{Cursor, Direction};
use crate::phases::GameOutcome;
use crate::replay::ReplayLog;
use crate::rules;
use crate::types::{Board, Cell, Player, Square};
use rand::Rng;
use tracing::{debug, info, instrument};

/// Complete state of one game.
///
/// Mutated only by [`GameState::place_marker`] and
/// [`GameState::move_cursor`]. The [`Controller`](crate::Controller) owns the
/// value and enforces that the cell under the cursor is empty before placing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    turn: Player,
    cursor: Cursor,
    move_count: u8,
    last_move: Option<Cell>,
    replay: ReplayLog,
}

impl GameState {
    /// Creates a new game, drawing the first player uniformly from `rng`.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let first = if rng.random_bool(0.5) {
            Player::X
        } else {
            Player::O
        };
        debug!(first_player = %first, "Drew first player");
        Self::with_first_player(first)
    }

    /// Creates a new game where `first` moves first.
    #[instrument]
    pub fn with_first_player(first: Player) -> Self {
        Self {
            board: Board::new(),
            turn: first,
            cursor: Cursor::new(),
            move_count: 0,
            last_move: None,
            replay: ReplayLog::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the cursor.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the number of successful placements so far.
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Returns the most recently filled cell.
    pub fn last_move(&self) -> Option<Cell> {
        self.last_move
    }

    /// Returns the replay log.
    pub fn replay(&self) -> &ReplayLog {
        &self.replay
    }

    /// Checks if `cell` is empty.
    pub fn is_cell_empty(&self, cell: Cell) -> bool {
        self.board.is_empty(cell)
    }

    /// Checks if the cell under the cursor is empty.
    pub fn cursor_on_empty(&self) -> bool {
        self.is_cell_empty(self.cursor.cell())
    }

    /// Moves the cursor one step, saturating at the board edge.
    #[instrument(skip(self), fields(from = %self.cursor.cell()))]
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.stepped(direction);
        debug!(to = %self.cursor.cell(), "Cursor moved");
    }

    /// Places the active player's mark on the cell under the cursor.
    ///
    /// Completes the whole placement: writes the mark, flips the turn,
    /// increments the move count, and appends a snapshot to the replay log.
    /// The cell must be empty; callers check with
    /// [`GameState::cursor_on_empty`] first.
    #[instrument(skip(self), fields(player = %self.turn, cell = %self.cursor.cell()))]
    pub fn place_marker(&mut self) -> Placement {
        let cell = self.cursor.cell();
        debug_assert!(self.board.is_empty(cell), "placed on occupied cell {cell}");

        let placement = Placement::new(self.turn, cell);
        self.board.set(cell, Square::Occupied(self.turn));
        self.turn = self.turn.opponent();
        self.move_count += 1;
        self.last_move = Some(cell);
        self.replay.record(placement, &self.board);
        info!(move_count = self.move_count, "Marker placed");

        #[cfg(debug_assertions)]
        crate::invariants::assert_invariants(self);

        placement
    }

    /// Evaluates the board through the last move.
    ///
    /// Returns [`GameOutcome::InProgress`] before the first placement.
    pub fn evaluate(&self) -> GameOutcome {
        match self.last_move {
            Some(cell) => self.evaluate_at(cell),
            None => GameOutcome::InProgress,
        }
    }

    /// Evaluates the board treating `last_move` as the cell just filled.
    pub fn evaluate_at(&self, last_move: Cell) -> GameOutcome {
        rules::evaluate(&self.board, last_move, self.move_count)
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_new_game_defaults() {
        let game = GameState::with_first_player(Player::O);
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.cursor().cell(), Cell::CENTER);
        assert_eq!(game.move_count(), 0);
        assert!(game.replay().is_empty());
        assert_eq!(game.last_move(), None);
        assert_eq!(game.evaluate(), GameOutcome::InProgress);
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = GameState::new(&mut StdRng::seed_from_u64(7));
        let b = GameState::new(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.turn(), b.turn());
    }

    #[test]
    fn test_both_players_can_start() {
        let firsts: std::collections::HashSet<Player> = (0..64)
            .map(|seed| GameState::new(&mut StdRng::seed_from_u64(seed)).turn())
            .collect();
        assert_eq!(firsts.len(), 2);
    }

    #[test]
    fn test_place_marker_updates_everything() {
        let mut game = GameState::with_first_player(Player::X);
        let placement = game.place_marker();

        assert_eq!(placement, Placement::new(Player::X, Cell::CENTER));
        assert_eq!(game.board().get(Cell::CENTER), Square::Occupied(Player::X));
        assert_eq!(game.turn(), Player::O);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.last_move(), Some(Cell::CENTER));
        assert_eq!(game.replay().len(), 1);
        assert!(!game.cursor_on_empty());
    }

    #[test]
    fn test_move_cursor_leaves_game_untouched() {
        let mut game = GameState::with_first_player(Player::X);
        game.place_marker();
        let before = game.clone();

        game.move_cursor(Direction::Up);
        game.move_cursor(Direction::Up);

        assert_eq!(game.cursor().cell(), Cell::ALL[1]);
        assert_eq!(game.board(), before.board());
        assert_eq!(game.turn(), before.turn());
        assert_eq!(game.move_count(), before.move_count());
        assert_eq!(game.replay(), before.replay());
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut game = GameState::with_first_player(Player::X);
        game.place_marker();
        assert_eq!(game.evaluate(), game.evaluate());
    }
}

//! Input controller and lifecycle state machine.

use crate::action::MoveError;
use crate::phases::{EndReason, GameOutcome, Lifecycle};
use crate::playable::{Directive, GameView, InputEvent, Playable};
use crate::state::GameState;
use tracing::{debug, info, instrument, warn};

/// Sole entry point for input.
///
/// Owns the [`GameState`], enforces the empty-cell precondition for
/// placements, and moves the [`Lifecycle`] from `InProgress` to `Ended`.
#[derive(Debug, Clone)]
pub struct Controller {
    state: GameState,
    lifecycle: Lifecycle,
    notice: Option<MoveError>,
}

impl Controller {
    /// Creates a controller for a fresh game.
    #[instrument(skip(state), fields(first_player = %state.turn()))]
    pub fn new(state: GameState) -> Self {
        info!("Starting game");
        Self {
            state,
            lifecycle: Lifecycle::InProgress,
            notice: None,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consumes the controller, returning the game state.
    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Returns the lifecycle.
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Returns the outcome of the board as it stands.
    pub fn outcome(&self) -> GameOutcome {
        self.state.evaluate()
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.lifecycle.is_over()
    }

    /// Returns the most recent rejected select, if it has not been cleared.
    pub fn notice(&self) -> Option<MoveError> {
        self.notice
    }

    /// Places a marker under the cursor and evaluates the board.
    ///
    /// Ends the game on a win or a tie. Only called while the game is in
    /// progress.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::CellOccupied`] if the cell under the cursor
    /// already holds a mark. Nothing is mutated on error.
    #[instrument(skip(self), fields(cell = %self.state.cursor().cell()))]
    fn select(&mut self) -> Result<GameOutcome, MoveError> {
        debug_assert!(!self.lifecycle.is_over(), "select after game end");

        let cell = self.state.cursor().cell();
        if !self.state.is_cell_empty(cell) {
            return Err(MoveError::CellOccupied { cell });
        }

        let placement = self.state.place_marker();
        let outcome = self.state.evaluate();
        debug!(%placement, %outcome, "Evaluated placement");

        self.lifecycle = Lifecycle::from(outcome);
        if let Lifecycle::Ended(reason) = self.lifecycle {
            info!(%reason, move_count = self.state.move_count(), "Game ended");
        }
        Ok(outcome)
    }

    /// Ends the game immediately.
    #[instrument(skip(self))]
    pub fn quit(&mut self) {
        if !self.lifecycle.is_over() {
            info!(move_count = self.state.move_count(), "Player quit");
            self.lifecycle = Lifecycle::Ended(EndReason::Quit);
        }
    }
}

impl Playable for Controller {
    #[instrument(skip(self), fields(lifecycle = ?self.lifecycle))]
    fn handle_input(&mut self, event: InputEvent) -> Directive {
        if self.lifecycle.is_over() {
            debug!("Input after game end");
            return Directive::Stop;
        }

        match event {
            InputEvent::Quit => {
                self.quit();
                Directive::Stop
            }
            InputEvent::Move(direction) => {
                self.notice = None;
                self.state.move_cursor(direction);
                Directive::Redraw
            }
            InputEvent::Select => match self.select() {
                Ok(outcome) => {
                    self.notice = None;
                    if outcome.is_over() {
                        Directive::Finish
                    } else {
                        Directive::Redraw
                    }
                }
                Err(error) => {
                    warn!(%error, "Rejected select");
                    self.notice = Some(error);
                    Directive::InvalidMove
                }
            },
            InputEvent::Other => Directive::Ignore,
        }
    }

    fn view(&self) -> GameView<'_> {
        GameView {
            board: self.state.board(),
            cursor: self.state.cursor(),
            turn: self.state.turn(),
            move_count: self.state.move_count(),
            lifecycle: self.lifecycle,
            notice: self.notice,
        }
    }
}

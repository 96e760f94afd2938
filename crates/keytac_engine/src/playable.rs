//! The capability seam between the game and a terminal framework.
//!
//! A framework owns the terminal and the event loop. It turns raw keys into
//! [`InputEvent`]s, hands them to a [`Playable`], acts on the returned
//! [`Directive`], and renders from [`Playable::view`].

use crate::action::MoveError;
use crate::cursor::{Cursor, Direction};
use crate::phases::Lifecycle;
use crate::types::{Board, Player};

/// A discrete input delivered by the framework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Move the cursor one step.
    Move(Direction),
    /// Place a marker under the cursor.
    Select,
    /// Leave the game.
    Quit,
    /// Any other key.
    Other,
}

/// What the framework should do after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Redraw the board.
    Redraw,
    /// The select was rejected. Warn the player and redraw.
    InvalidMove,
    /// The game just ended. Draw the final screen, then pause until any key
    /// and stop.
    Finish,
    /// Stop the framework.
    Stop,
    /// Nothing changed.
    Ignore,
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView<'a> {
    /// The board.
    pub board: &'a Board,
    /// The highlighted cell.
    pub cursor: Cursor,
    /// Whose turn it is.
    pub turn: Player,
    /// Placements made so far.
    pub move_count: u8,
    /// Whether the game is still running.
    pub lifecycle: Lifecycle,
    /// The most recent rejected select, until the next accepted input.
    pub notice: Option<MoveError>,
}

/// A game the terminal framework can drive.
pub trait Playable {
    /// Handles one input event and returns the framework's next step.
    fn handle_input(&mut self, event: InputEvent) -> Directive;

    /// Produces the render model for the current state.
    fn view(&self) -> GameView<'_>;
}

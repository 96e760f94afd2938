//! Cursor-driven tic-tac-toe engine.
//!
//! The board, cursor, turn order, and incremental win/tie detection live
//! here, together with the [`Controller`] that turns discrete input events
//! into state changes. Nothing in this crate touches a terminal: a
//! framework drives any [`Playable`] and renders its [`GameView`].
//!
//! # Example
//!
//! ```
//! use keytac_engine::{Controller, Direction, Directive, GameState, InputEvent, Playable, Player};
//!
//! let mut game = Controller::new(GameState::with_first_player(Player::X));
//! assert_eq!(game.handle_input(InputEvent::Move(Direction::Up)), Directive::Redraw);
//! assert_eq!(game.handle_input(InputEvent::Select), Directive::Redraw);
//! assert_eq!(game.state().move_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod cursor;
pub mod invariants;
mod phases;
mod playable;
mod replay;
pub mod rules;
mod state;
mod types;

pub use action::{MoveError, Placement};
pub use controller::Controller;
pub use cursor::{Cursor, Direction};
pub use phases::{EndReason, GameOutcome, Lifecycle};
pub use playable::{Directive, GameView, InputEvent, Playable};
pub use replay::{ReplayLog, Snapshot};
pub use state::GameState;
pub use types::{Board, Cell, Player, Square};

//! Outcome and lifecycle types.
//!
//! [`GameOutcome`] is derived from the board after each placement.
//! [`Lifecycle`] is the controller's state machine and is the only one of
//! the two that is stored.

use crate::types::Player;
use serde::Serialize;

/// Result of evaluating the board after the last move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum GameOutcome {
    /// No line of three and free squares remain.
    #[display("In progress")]
    InProgress,
    /// A player completed a line of three.
    #[display("Player {_0} wins")]
    Win(Player),
    /// The board is full with no line of three.
    #[display("Tie")]
    Tie,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(player),
            _ => None,
        }
    }

    /// Returns true once the game can accept no more moves.
    pub fn is_over(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum EndReason {
    /// A player completed a line of three.
    #[display("Player {_0} wins")]
    Winner(Player),
    /// The board filled up without a winner.
    #[display("Tie")]
    Tie,
    /// A player quit.
    #[display("Quit")]
    Quit,
}

/// Top-level state machine: is input still accepted?
///
/// `InProgress --win--> Ended(Winner)`, `InProgress --full--> Ended(Tie)`,
/// `InProgress --quit--> Ended(Quit)`. Every `Ended` state is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Lifecycle {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// The game has concluded.
    Ended(EndReason),
}

impl Lifecycle {
    /// Returns true if the game has concluded.
    pub fn is_over(self) -> bool {
        matches!(self, Lifecycle::Ended(_))
    }

    /// Returns the end reason, if the game has concluded.
    pub fn end_reason(self) -> Option<EndReason> {
        match self {
            Lifecycle::InProgress => None,
            Lifecycle::Ended(reason) => Some(reason),
        }
    }
}

impl From<GameOutcome> for Lifecycle {
    fn from(outcome: GameOutcome) -> Self {
        match outcome {
            GameOutcome::InProgress => Lifecycle::InProgress,
            GameOutcome::Win(player) => Lifecycle::Ended(EndReason::Winner(player)),
            GameOutcome::Tie => Lifecycle::Ended(EndReason::Tie),
        }
    }
}

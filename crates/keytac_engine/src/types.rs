//! Core domain types for tic-tac-toe.

use serde::Serialize;
use std::fmt;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X.
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the glyph drawn on the board for this player.
    pub fn marker(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the player occupying the square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// A board coordinate. Both `row` and `col` are always in `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Cell {
    row: usize,
    col: usize,
}

impl Cell {
    /// The center cell, where the cursor starts.
    pub const CENTER: Cell = Cell { row: 1, col: 1 };

    /// All 9 cells in row-major order.
    pub const ALL: [Cell; 9] = [
        Cell { row: 0, col: 0 },
        Cell { row: 0, col: 1 },
        Cell { row: 0, col: 2 },
        Cell { row: 1, col: 0 },
        Cell { row: 1, col: 1 },
        Cell { row: 1, col: 2 },
        Cell { row: 2, col: 0 },
        Cell { row: 2, col: 1 },
        Cell { row: 2, col: 2 },
    ];

    /// Creates a cell, or `None` if either coordinate is outside `0..=2`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a cell, saturating each coordinate at the board edge.
    pub fn clamped(row: usize, col: usize) -> Self {
        Self {
            row: row.min(2),
            col: col.min(2),
        }
    }

    /// Row index (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Whether the cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// Whether the cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.row][cell.col]
    }

    /// Sets the square at the given cell.
    ///
    /// Only [`GameState::place_marker`](crate::GameState::place_marker) writes
    /// to a live board.
    pub(crate) fn set(&mut self, cell: Cell, square: Square) {
        self.squares[cell.row][cell.col] = square;
    }

    /// Checks if the square at `cell` is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_empty()
    }

    /// Iterates over every cell with its square, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Cell, Square)> + '_ {
        Cell::ALL.into_iter().map(|cell| (cell, self.get(cell)))
    }

    /// Number of non-empty squares.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, square)| !square.is_empty()).count()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.occupied_count() == 9
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.squares.iter().enumerate() {
            let glyphs: Vec<String> = row
                .iter()
                .map(|square| match square {
                    Square::Empty => ".".to_string(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect();
            write!(f, "{}", glyphs.join("|"))?;
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

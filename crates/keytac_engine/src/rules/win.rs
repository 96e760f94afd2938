//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player, Square};
use tracing::instrument;

const MAIN_DIAGONAL: [Cell; 3] = [Cell::ALL[0], Cell::ALL[4], Cell::ALL[8]];
const ANTI_DIAGONAL: [Cell; 3] = [Cell::ALL[2], Cell::ALL[4], Cell::ALL[6]];

/// Returns the owner of `line` if all three squares hold the same player.
///
/// Empty never matches, so an empty line has no owner.
fn line_owner(board: &Board, line: [Cell; 3]) -> Option<Player> {
    let [a, b, c] = line.map(|cell| board.get(cell));
    match a {
        Square::Occupied(player) if a == b && b == c => Some(player),
        _ => None,
    }
}

/// Checks the lines through `last_move` for three in a row.
///
/// Checks the column, then the row, then the main diagonal (when
/// `row == col`), then the anti-diagonal (when `row + col == 2`).
#[instrument(level = "trace", skip(board))]
pub fn winner_through(board: &Board, last_move: Cell) -> Option<Player> {
    let (row, col) = (last_move.row(), last_move.col());
    let column = [0, 1, 2].map(|r| Cell::clamped(r, col));
    let row_line = [0, 1, 2].map(|c| Cell::clamped(row, c));

    line_owner(board, column)
        .or_else(|| line_owner(board, row_line))
        .or_else(|| {
            last_move
                .on_main_diagonal()
                .then(|| line_owner(board, MAIN_DIAGONAL))
                .flatten()
        })
        .or_else(|| {
            last_move
                .on_anti_diagonal()
                .then(|| line_owner(board, ANTI_DIAGONAL))
                .flatten()
        })
}

/// Checks all eight lines for three in a row.
///
/// Used to audit the incremental check; gameplay uses [`winner_through`].
#[instrument(level = "trace", skip(board))]
pub fn scan_winner(board: &Board) -> Option<Player> {
    let rows = (0..3).map(|r| [0, 1, 2].map(|c| Cell::clamped(r, c)));
    let columns = (0..3).map(|c| [0, 1, 2].map(|r| Cell::clamped(r, c)));
    rows.chain(columns)
        .chain([MAIN_DIAGONAL, ANTI_DIAGONAL])
        .find_map(|line| line_owner(board, line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for (index, player) in marks {
            board.set(Cell::ALL[*index], Square::Occupied(*player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        for cell in Cell::ALL {
            assert_eq!(winner_through(&board, cell), None);
        }
        assert_eq!(scan_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Player::X), (1, Player::X), (2, Player::X)]);
        assert_eq!(winner_through(&board, Cell::ALL[2]), Some(Player::X));
        assert_eq!(scan_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = board_with(&[(1, Player::O), (4, Player::O), (7, Player::O)]);
        assert_eq!(winner_through(&board, Cell::ALL[7]), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = board_with(&[(0, Player::O), (4, Player::O), (8, Player::O)]);
        assert_eq!(winner_through(&board, Cell::ALL[8]), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Player::X), (4, Player::X), (6, Player::X)]);
        assert_eq!(winner_through(&board, Cell::ALL[6]), Some(Player::X));
        assert_eq!(winner_through(&board, Cell::CENTER), Some(Player::X));
    }

    #[test]
    fn test_line_not_through_last_move_is_ignored() {
        // Top row is complete, but the last move at (2,2) is not on it.
        let board = board_with(&[
            (0, Player::X),
            (1, Player::X),
            (2, Player::X),
            (8, Player::O),
        ]);
        assert_eq!(winner_through(&board, Cell::ALL[8]), None);
        assert_eq!(scan_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_diagonal_not_checked_off_diagonal() {
        let board = board_with(&[(0, Player::X), (4, Player::X), (8, Player::X), (1, Player::O)]);
        assert_eq!(winner_through(&board, Cell::ALL[1]), None);
    }

    #[test]
    fn test_mixed_line_has_no_owner() {
        let board = board_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(winner_through(&board, Cell::ALL[2]), None);
    }
}

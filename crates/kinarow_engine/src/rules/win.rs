//! Win detection along the four line axes.

use crate::direction::{Axis, Step};
use crate::position::Position;
use crate::types::{Board, Player, Square};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether the move just committed at `position` completed a run of
/// at least `threshold` cells for `player`.
///
/// Only lines through the placed cell are inspected; the rest of the board
/// cannot have changed. The first satisfying axis short-circuits the scan.
#[instrument(skip(board))]
pub fn winning_move(board: &Board, player: Player, position: Position, threshold: usize) -> bool {
    Axis::iter().any(|axis| run_length(board, player, position, axis) >= threshold)
}

/// Length of the maximal same-owner run through `position` along `axis`:
/// the placed cell plus the consecutive cells walked forward and backward.
#[instrument(skip(board))]
pub fn run_length(board: &Board, player: Player, position: Position, axis: Axis) -> usize {
    1 + count_toward(board, player, position, axis.forward())
        + count_toward(board, player, position, axis.backward())
}

// Walks from `position` (exclusive) in `step` increments. A step continues
// only while the next cell is on the board and owned by `player`; the first
// invalid cell ends the walk, so gaps never bridge a run.
fn count_toward(board: &Board, player: Player, position: Position, step: Step) -> usize {
    let mut row = position.row() + step.row;
    let mut column = position.column() + step.column;
    let mut count = 0;
    while board.get(row, column) == Some(Square::Occupied(player)) {
        count += 1;
        row += step.row;
        column += step.column;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: &mut Board, player: Player, cells: &[(i32, i32)]) {
        for &(row, column) in cells {
            board.set(row, column, Square::Occupied(player)).unwrap();
        }
    }

    #[test]
    fn test_lone_cell_has_run_of_one() {
        let mut board = Board::new(3, 3);
        let player = Player::new(0, 'X');
        occupy(&mut board, player, &[(1, 1)]);
        for axis in Axis::ALL {
            assert_eq!(run_length(&board, player, Position::new(1, 1), axis), 1);
        }
    }

    #[test]
    fn test_horizontal_run_counts_both_directions() {
        let mut board = Board::new(3, 3);
        let player = Player::new(0, 'X');
        occupy(&mut board, player, &[(0, 0), (0, 1), (0, 2)]);
        // Scanned from the middle cell: one forward, one backward.
        let length = run_length(&board, player, Position::new(0, 1), Axis::Horizontal);
        assert_eq!(length, 3);
    }

    #[test]
    fn test_gap_stops_the_walk() {
        let mut board = Board::new(3, 5);
        let player = Player::new(0, 'X');
        occupy(&mut board, player, &[(0, 0), (0, 1), (0, 3), (0, 4)]);
        let length = run_length(&board, player, Position::new(0, 1), Axis::Horizontal);
        assert_eq!(length, 2);
    }

    #[test]
    fn test_opponent_cell_stops_the_walk() {
        let mut board = Board::new(3, 3);
        let player = Player::new(0, 'X');
        let opponent = Player::new(1, 'O');
        occupy(&mut board, player, &[(1, 0), (1, 1)]);
        occupy(&mut board, opponent, &[(1, 2)]);
        let length = run_length(&board, player, Position::new(1, 1), Axis::Horizontal);
        assert_eq!(length, 2);
    }

    #[test]
    fn test_winning_move_on_anti_diagonal() {
        let mut board = Board::new(3, 3);
        let player = Player::new(0, 'X');
        occupy(&mut board, player, &[(2, 0), (1, 1), (0, 2)]);
        assert!(winning_move(&board, player, Position::new(1, 1), 3));
        assert!(winning_move(&board, player, Position::new(2, 0), 3));
        assert!(winning_move(&board, player, Position::new(0, 2), 3));
    }

    #[test]
    fn test_threshold_not_reached() {
        let mut board = Board::new(3, 3);
        let player = Player::new(0, 'X');
        occupy(&mut board, player, &[(0, 0), (1, 1)]);
        assert!(!winning_move(&board, player, Position::new(1, 1), 3));
        assert!(winning_move(&board, player, Position::new(1, 1), 2));
    }
}

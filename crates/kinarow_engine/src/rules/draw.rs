//! Draw detection.

use crate::types::{Board, Square};
use tracing::instrument;

/// True when every square on the board is occupied.
///
/// The engine tracks occupancy with a counter for O(1) draw detection;
/// this scan is the ground truth it is checked against.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|square| *square != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new(3, 3)));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new(2, 2);
        board.set(0, 0, Square::Occupied(Player::new(0, 'X'))).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(2, 2);
        let player = Player::new(0, 'X');
        for row in 0..2 {
            for column in 0..2 {
                board.set(row, column, Square::Occupied(player)).unwrap();
            }
        }
        assert!(is_full(&board));
    }
}

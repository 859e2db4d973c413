//! History-consistency invariant.

use super::Invariant;
use crate::engine::Engine;
use crate::types::{Board, Square};

/// Invariant: replaying the move history onto a fresh board reproduces
/// the current board exactly.
///
/// Squares are monotonic: once a cell gains an owner it never changes, so
/// the history is a complete account of the board and a replay that hits
/// an already-owned cell proves corruption.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let mut reconstructed = Board::new(engine.board().rows(), engine.board().columns());

        for mov in engine.history() {
            let (row, column) = (mov.position.row(), mov.position.column());
            if !reconstructed.is_empty(row, column) {
                return false;
            }
            if reconstructed
                .set(row, column, Square::Occupied(mov.player))
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "replaying the history reproduces the board without overwrites"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Roster};

    #[test]
    fn test_holds_for_fresh_game() {
        let engine = Engine::new(Board::new(3, 3), Roster::default(), 3);
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_holds_after_moves() {
        let engine = Engine::replay(
            Board::new(3, 3),
            Roster::default(),
            3,
            ["b2", "a1", "c1", "a2"],
        )
        .unwrap();
        assert!(HistoryConsistentInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_board_tampering() {
        let mut engine = Engine::new(Board::new(3, 3), Roster::default(), 3);
        engine.apply("b2").unwrap();

        // Flip the owned cell to the other player without touching history.
        engine
            .board
            .set(1, 1, Square::Occupied(Player::new(1, 'O')))
            .unwrap();

        assert!(!HistoryConsistentInvariant::holds(&engine));
    }
}

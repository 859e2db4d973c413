//! Turn cursor invariant.

use super::Invariant;
use crate::engine::Engine;

/// Invariant: the turn cursor stays in `[0, player_count)` and equals the
/// number of committed moves modulo the player count.
///
/// The cursor advances by exactly one on every committed move, including
/// the move that ends the game, and never on a rejected one.
pub struct TurnCursorInvariant;

impl Invariant<Engine> for TurnCursorInvariant {
    fn holds(engine: &Engine) -> bool {
        let players = engine.roster().len();
        *engine.cursor() < players && *engine.cursor() == engine.history().len() % players
    }

    fn description() -> &'static str {
        "turn cursor is in range and tracks committed moves modulo player count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Roster};

    #[test]
    fn test_holds_through_three_player_rotation() {
        let mut engine = Engine::new(Board::new(4, 4), Roster::from_symbols(['X', 'O', 'Z']), 4);
        for identifier in ["a1", "b1", "c1", "a2", "b2"] {
            engine.apply(identifier).unwrap();
            assert!(TurnCursorInvariant::holds(&engine));
        }
        assert_eq!(*engine.cursor(), 5 % 3);
    }

    #[test]
    fn test_detects_out_of_range_cursor() {
        let mut engine = Engine::new(Board::new(3, 3), Roster::default(), 3);
        engine.cursor = 7;
        assert!(!TurnCursorInvariant::holds(&engine));
    }

    #[test]
    fn test_detects_skipped_rotation() {
        let mut engine = Engine::new(Board::new(3, 3), Roster::default(), 3);
        engine.apply("a1").unwrap();
        engine.cursor = 0;
        assert!(!TurnCursorInvariant::holds(&engine));
    }
}

//! Occupied-cell counter invariant.

use super::Invariant;
use crate::engine::Engine;
use crate::types::Square;

/// Invariant: the occupied-cell counter equals the number of occupied
/// squares on the board.
///
/// The counter exists so draw detection is O(1); this invariant pins it
/// to the ground truth a full rescan would give.
pub struct OccupiedCountInvariant;

impl Invariant<Engine> for OccupiedCountInvariant {
    fn holds(engine: &Engine) -> bool {
        let scanned = engine
            .board()
            .squares()
            .iter()
            .filter(|square| **square != Square::Empty)
            .count();
        *engine.occupied() == scanned
    }

    fn description() -> &'static str {
        "occupied-cell counter matches a full board scan"
    }
}

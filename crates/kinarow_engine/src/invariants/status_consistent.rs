//! Terminal-status consistency invariant.

use super::Invariant;
use crate::engine::Engine;
use crate::rules;
use crate::types::GameStatus;

/// Invariant: a terminal status agrees with the board that produced it.
///
/// A drawn game has a full board; a won game's final committed move
/// completed a run at least the win threshold long for the recorded
/// winner. An in-progress game claims nothing.
pub struct StatusConsistentInvariant;

impl Invariant<Engine> for StatusConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        match engine.status() {
            GameStatus::InProgress => true,
            GameStatus::Drawn => rules::is_full(engine.board()),
            GameStatus::Won(winner) => engine.history().last().is_some_and(|last| {
                last.player == *winner
                    && rules::winning_move(
                        engine.board(),
                        last.player,
                        last.position,
                        *engine.win_threshold(),
                    )
            }),
        }
    }

    fn description() -> &'static str {
        "terminal status agrees with the board state"
    }
}

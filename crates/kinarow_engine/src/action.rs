//! First-class move records and move errors.
//!
//! Committed moves are domain events: they carry the acting player and the
//! cell taken, serialize for diagnostics, and let invariants replay a game
//! from its history.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A committed move: a player taking ownership of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// The cell the player took.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Errors raised while validating a proposed move.
///
/// All three are recoverable and raised before any state change; a
/// rejected move leaves board, counter, and cursor untouched. Commands
/// arriving after the game has concluded are ignored, not errored.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Identifier does not match the `<letter><digit>` grammar.
    #[display("malformed cell identifier {:?}", _0)]
    MalformedIdentifier(String),

    /// Parsed coordinate lies outside the board.
    #[display("cell ({}, {}) does not exist on the board", _0, _1)]
    CellDoesNotExist(i32, i32),

    /// Target cell already has an owner.
    #[display("cell ({}, {}) is already taken", _0, _1)]
    CellAlreadyTaken(i32, i32),
}

impl std::error::Error for MoveError {}

//! Move orchestration: validation ladder, commit, status update, rotation.

use crate::action::{Move, MoveError};
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Roster, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The game engine.
///
/// Owns the board, the roster, turn order, and the occupied-cell counter.
/// All mutation goes through [`Engine::apply`]; a move either fully
/// commits (cell, counter, status, cursor) or fully aborts with no state
/// change. Single-threaded and synchronous: each call runs to completion
/// before the next is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Engine {
    /// Grid state, fixed dimensions.
    pub(crate) board: Board,
    /// Player registry, fixed for the game.
    pub(crate) roster: Roster,
    /// Run length required to win. Not validated against the board
    /// dimensions; a threshold no line can reach simply never triggers.
    pub(crate) win_threshold: usize,
    /// Turn cursor: roster index of the player to move next.
    pub(crate) cursor: usize,
    /// Occupied-cell counter; equals the number of occupied squares.
    pub(crate) occupied: usize,
    /// Set at most once to a terminal value, never reverts.
    pub(crate) status: GameStatus,
    /// Committed moves in order.
    pub(crate) history: Vec<Move>,
}

impl Engine {
    /// Creates an engine over a fresh game: cursor and counter at zero,
    /// status in progress.
    ///
    /// # Panics
    ///
    /// Panics on an empty roster or a zero win threshold.
    #[instrument(skip(board, roster))]
    pub fn new(board: Board, roster: Roster, win_threshold: usize) -> Self {
        assert!(!roster.is_empty(), "roster must hold at least one player");
        assert!(win_threshold > 0, "win threshold must be positive");
        Self {
            board,
            roster,
            win_threshold,
            cursor: 0,
            occupied: 0,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Builds an engine by applying each identifier in turn.
    ///
    /// Stops at the first rejected move and surfaces its error.
    pub fn replay<'a>(
        board: Board,
        roster: Roster,
        win_threshold: usize,
        identifiers: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, MoveError> {
        let mut engine = Self::new(board, roster, win_threshold);
        for identifier in identifiers {
            engine.apply(identifier)?;
        }
        Ok(engine)
    }

    /// The player the turn cursor points at.
    pub fn current_player(&self) -> Player {
        self.roster
            .get(self.cursor)
            .expect("turn cursor stays within the roster")
    }

    /// The winning player, if the game has been won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// True once the game has ended with a full board and no winner.
    pub fn is_drawn(&self) -> bool {
        self.status == GameStatus::Drawn
    }

    /// Applies one move named by its cell identifier.
    ///
    /// The validation ladder runs in order: parse, bounds, occupancy.
    /// A failure at any rung rejects the move with no state change. On
    /// commit, the cell is assigned to the current player, the counter
    /// advances, win detection runs from the placed cell, a terminal
    /// status is recorded if reached, and the turn cursor rotates to the
    /// next player.
    ///
    /// Once the status is terminal, further calls are silent no-ops: the
    /// command is ignored and `Ok(())` is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::MalformedIdentifier`] if the identifier does not
    ///   match the `<letter><digit>` grammar.
    /// - [`MoveError::CellDoesNotExist`] if the coordinate is off the
    ///   board.
    /// - [`MoveError::CellAlreadyTaken`] if the cell has an owner.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn apply(&mut self, identifier: &str) -> Result<(), MoveError> {
        if self.status.is_terminal() {
            debug!(identifier, "ignoring command after game end");
            return Ok(());
        }

        let position: Position = identifier.parse()?;
        let (row, column) = (position.row(), position.column());
        if !self.board.contains(row, column) {
            return Err(MoveError::CellDoesNotExist(row, column));
        }
        if !self.board.is_empty(row, column) {
            return Err(MoveError::CellAlreadyTaken(row, column));
        }

        let player = self.current_player();
        self.board
            .set(row, column, Square::Occupied(player))
            .expect("coordinate bounds were checked above");
        self.occupied += 1;
        self.history.push(Move::new(player, position));

        if rules::winning_move(&self.board, player, position, self.win_threshold) {
            debug!(%player, %position, "winning move");
            self.status = GameStatus::Won(player);
        } else if self.occupied == self.board.rows() * self.board.columns() {
            debug!("board full, game drawn");
            self.status = GameStatus::Drawn;
        }

        // The cursor rotates even when this move ended the game.
        self.cursor = (self.cursor + 1) % self.roster.len();

        debug_assert!(
            EngineInvariants::check_all(self).is_ok(),
            "engine invariants violated after commit"
        );
        Ok(())
    }
}

//! Move validation, turn rotation, and win/draw evaluation for k-in-a-row
//! grid games.
//!
//! The engine generalizes the familiar 3x3 tic-tac-toe shape: boards are
//! R rows by C columns, any number of players take turns in roster order,
//! and a run of `win_threshold` same-owner cells along any of the four line
//! axes wins. Board storage, the player roster, and all I/O live outside
//! the move pipeline; the engine owns turn order and move application.
//!
//! # Example
//!
//! ```
//! use kinarow_engine::{Board, Engine, GameStatus, Roster};
//!
//! let mut engine = Engine::new(Board::new(3, 3), Roster::from_symbols(['X', 'O']), 3);
//! for identifier in ["a1", "b1", "a2", "b2", "a3"] {
//!     engine.apply(identifier)?;
//! }
//! assert!(matches!(engine.status(), GameStatus::Won(_)));
//! # Ok::<(), kinarow_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod direction;
mod engine;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use direction::{Axis, Step};
pub use engine::Engine;
pub use position::Position;
pub use types::{Board, GameStatus, Player, Roster, Square};

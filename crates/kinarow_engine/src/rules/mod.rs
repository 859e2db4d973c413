//! Evaluation rules for the engine.
//!
//! Pure functions over board state, kept separate from move orchestration
//! so they can be tested and composed into invariants independently.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{run_length, winning_move};

//! The four line axes through a cell.

use serde::{Deserialize, Serialize};

/// A unit step on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Step {
    /// Row delta per step.
    pub row: i32,
    /// Column delta per step.
    pub column: i32,
}

impl Step {
    /// The opposite step.
    pub const fn negate(self) -> Self {
        Self {
            row: -self.row,
            column: -self.column,
        }
    }
}

/// One of the four unordered line axes a winning run can lie on.
///
/// Each axis is a forward unit vector and its negation; win scans walk
/// both ways from the placed cell. The fixed set is iterated data-driven,
/// either through [`Axis::ALL`] or `strum`'s `EnumIter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Axis {
    /// Left-right.
    Horizontal,
    /// Top-bottom.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Bottom-left to top-right.
    AntiDiagonal,
}

impl Axis {
    /// All four axes.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::MainDiagonal,
        Axis::AntiDiagonal,
    ];

    /// Forward unit vector for this axis.
    pub const fn forward(self) -> Step {
        match self {
            Axis::Horizontal => Step { row: 0, column: 1 },
            Axis::Vertical => Step { row: 1, column: 0 },
            Axis::MainDiagonal => Step { row: 1, column: 1 },
            Axis::AntiDiagonal => Step { row: -1, column: 1 },
        }
    }

    /// Backward unit vector: the negated forward vector.
    pub const fn backward(self) -> Step {
        self.forward().negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_backward_negates_forward() {
        for axis in Axis::ALL {
            let forward = axis.forward();
            let backward = axis.backward();
            assert_eq!(forward.row, -backward.row);
            assert_eq!(forward.column, -backward.column);
        }
    }

    #[test]
    fn test_every_forward_vector_is_a_unit_step() {
        for axis in Axis::iter() {
            let step = axis.forward();
            assert!(step.row.abs() <= 1 && step.column.abs() <= 1);
            assert!((step.row, step.column) != (0, 0));
        }
    }

    #[test]
    fn test_iteration_matches_const_set() {
        let iterated: Vec<Axis> = Axis::iter().collect();
        assert_eq!(iterated, Axis::ALL);
    }
}

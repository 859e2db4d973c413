//! Cell identifiers and the coordinates they name.

use crate::action::MoveError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A zero-based (row, column) coordinate parsed from a cell identifier.
///
/// Identifiers follow the `<letter><digit>` grammar: the letter names the
/// row (case-insensitive, `a` = 0 through `z` = 25) and the digit names the
/// 1-based column. The single-digit grammar caps addressable cells at 26
/// rows by 9 columns; this is a property of the identifier format, not of
/// the board.
///
/// Coordinates are signed: the digit `0` parses to column -1, which the
/// bounds stage rejects rather than the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    /// Zero-based row.
    pub fn row(self) -> i32 {
        self.row
    }

    /// Zero-based column.
    pub fn column(self) -> i32 {
        self.column
    }
}

impl FromStr for Position {
    type Err = MoveError;

    /// Parses a cell identifier. Pure: no side effects, and the error
    /// carries the offending input verbatim.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MoveError::MalformedIdentifier(s.to_string());
        let mut chars = s.chars();
        let letter = chars.next().ok_or_else(malformed)?;
        let digit = chars.next().ok_or_else(malformed)?;
        if chars.next().is_some() || !letter.is_ascii_alphabetic() || !digit.is_ascii_digit() {
            return Err(malformed());
        }
        let row = letter.to_ascii_lowercase() as i32 - 'a' as i32;
        let column = digit as i32 - '0' as i32 - 1;
        Ok(Self { row, column })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if (0..26).contains(&self.row) && (0..9).contains(&self.column) {
            write!(f, "{}{}", (b'a' + self.row as u8) as char, self.column + 1)
        } else {
            write!(f, "({}, {})", self.row, self.column)
        }
    }
}

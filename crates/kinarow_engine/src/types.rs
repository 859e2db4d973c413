//! Core domain types: players, squares, the board, and game status.

use serde::{Deserialize, Serialize};

/// A player registered for one game.
///
/// Identity is the stable roster index; the symbol is what gets drawn on
/// the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    index: usize,
    symbol: char,
}

impl Player {
    /// Stable index in the roster, in `[0, roster.len())`.
    pub fn index(self) -> usize {
        self.index
    }

    /// Symbol drawn on the board for this player.
    pub fn symbol(self) -> char {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

/// The player registry: an ordered, fixed set of players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Builds a roster from player symbols, assigning indices in turn order.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        Self {
            players: symbols
                .into_iter()
                .enumerate()
                .map(|(index, symbol)| Player::new(index, symbol))
                .collect(),
        }
    }

    /// Number of registered players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Returns true if no players are registered.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Looks up a player by roster index.
    pub fn get(&self, index: usize) -> Option<Player> {
        self.players.get(index).copied()
    }
}

impl Default for Roster {
    /// The classic two-player roster: X moves first, then O.
    fn default() -> Self {
        Self::from_symbols(['X', 'O'])
    }
}

/// Ownership state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// No owner yet.
    Empty,
    /// Cell owned by a player.
    Occupied(Player),
}

/// Rectangular R x C grid of squares, row-major.
///
/// Coordinates are signed so that directional walks and out-of-range
/// parsed positions fail cleanly instead of wrapping: `get` returns
/// `None` for anything outside the grid, negatives included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    columns: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn new(rows: usize, columns: usize) -> Self {
        assert!(rows > 0 && columns > 0, "board dimensions must be positive");
        Self {
            rows,
            columns,
            squares: vec![Square::Empty; rows * columns],
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, row: i32, column: i32) -> bool {
        row >= 0 && column >= 0 && (row as usize) < self.rows && (column as usize) < self.columns
    }

    /// Gets the square at the given coordinate, or `None` off the board.
    pub fn get(&self, row: i32, column: i32) -> Option<Square> {
        if !self.contains(row, column) {
            return None;
        }
        Some(self.squares[row as usize * self.columns + column as usize])
    }

    /// Sets the square at the given coordinate.
    pub fn set(&mut self, row: i32, column: i32, square: Square) -> Result<(), &'static str> {
        if !self.contains(row, column) {
            return Err("coordinate out of bounds");
        }
        self.squares[row as usize * self.columns + column as usize] = square;
        Ok(())
    }

    /// Checks if the square at the coordinate exists and is empty.
    pub fn is_empty(&self, row: i32, column: i32) -> bool {
        matches!(self.get(row, column), Some(Square::Empty))
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Formats the board as a human-readable grid with row letters and
    /// column numbers matching the cell-identifier grammar.
    pub fn display(&self) -> String {
        let mut out = String::from("  ");
        for column in 1..=self.columns {
            out.push_str(&column.to_string());
            if column < self.columns {
                out.push(' ');
            }
        }
        for row in 0..self.rows {
            out.push('\n');
            // Rows past 'z' exist but are not addressable by identifier.
            let label = if row < 26 { (b'a' + row as u8) as char } else { '?' };
            out.push(label);
            out.push(' ');
            for column in 0..self.columns {
                let symbol = match self.squares[row * self.columns + column] {
                    Square::Empty => ' ',
                    Square::Occupied(player) => player.symbol(),
                };
                out.push(symbol);
                if column + 1 < self.columns {
                    out.push('|');
                }
            }
        }
        out
    }
}

/// Current status of the game.
///
/// `Won` and `Drawn` are terminal: the status is set at most once and the
/// engine ignores further commands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Board filled with no winner.
    Drawn,
}

impl GameStatus {
    /// Returns true for `Won` or `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

//! Board coordinates and word orientation.

use derive_more::Display;

/// A zero-based board position.
///
/// Rows grow downward, columns grow rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display("({row}, {col})")]
pub struct Position {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Orientation of a word on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Direction {
    /// Letters extend rightward; the column increases.
    #[display("across")]
    Across,
    /// Letters extend downward; the row increases.
    #[display("down")]
    Down,
}

impl Direction {
    /// Returns the position of the letter at `index` for a word starting at
    /// `start` with this orientation.
    #[must_use]
    #[inline]
    pub const fn step(self, start: Position, index: usize) -> Position {
        match self {
            Self::Across => Position::new(start.row, start.col + index),
            Self::Down => Position::new(start.row + index, start.col),
        }
    }
}

/// Immutable board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{rows}x{cols}")]
pub struct BoardDims {
    /// Number of rows (>= 1 for a usable board).
    pub rows: usize,
    /// Number of columns (>= 1 for a usable board).
    pub cols: usize,
}

impl BoardDims {
    /// Creates new board dimensions.
    ///
    /// Degenerate dimensions (a zero side) are rejected by
    /// [`Puzzle::build`](crate::Puzzle::build), not here, so that the error
    /// carries puzzle context.
    #[must_use]
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Returns whether `pos` lies within the board.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Total number of board positions.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        self.rows * self.cols
    }

    /// Row-major linear index of `pos`, or `None` if out of bounds.
    #[must_use]
    #[inline]
    pub const fn index_of(self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }
}

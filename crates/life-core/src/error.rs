//! Grid error types.

use thiserror::Error;

/// Errors raised while building a grid from a textual pattern.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The pattern had no rows, or its first row had no columns.
    #[error("pattern is empty")]
    Empty,

    /// A row's width differs from the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A character other than `#` (alive) or `.` (dead).
    #[error("invalid cell {ch:?} at ({row}, {col})")]
    InvalidCell { row: usize, col: usize, ch: char },
}

/// Result type for grid construction.
pub type GridResult<T> = Result<T, GridError>;

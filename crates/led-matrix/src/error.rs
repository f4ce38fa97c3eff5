//! Matrix error types.

use thiserror::Error;

/// Matrix error type.
#[derive(Debug, Error)]
pub enum MatrixError {
    /// A layout parameter was zero.
    #[error("layout {field} must be non-zero")]
    EmptyLayout { field: &'static str },

    /// Layout dimensions whose products overflow.
    #[error("layout too large to address")]
    LayoutTooLarge,

    /// A pixel address outside the device surface.
    #[error("pixel ({row}, {col}) outside {rows}x{cols} device surface")]
    OffSurface {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A grid whose dimensions don't match the layout.
    #[error("grid is {found_rows}x{found_cols}, layout expects {rows}x{cols}")]
    GridShape {
        rows: usize,
        cols: usize,
        found_rows: usize,
        found_cols: usize,
    },

    /// Display driver I/O failure.
    #[error("display io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for matrix operations.
pub type MatrixResult<T> = Result<T, MatrixError>;

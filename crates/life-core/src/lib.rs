//! Bounded Game of Life
//!
//! A fixed-size boolean grid with closed edges: every cell outside the grid
//! reads as dead, nothing outside it is ever written.
//!
//! ```text
//!   n < 2   → dead   (solitude)
//!   n > 3   → dead   (overcrowded)
//!   n == 3  → alive  (populate)
//!   n == 2  → keep
//! ```

mod error;
mod grid;
mod simulation;

pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use simulation::{Rule, advance, advance_into, count_neighbours};

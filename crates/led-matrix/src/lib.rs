//! Tiled LED matrix
//!
//! Maps the logical life grid onto a chain of identical LED tiles and pushes
//! generations to any [`PixelSink`].
//!
//! # Addressing
//!
//! The chain exposes a single band of `tile_height` device rows. Each band of
//! tile rows in the logical grid is concatenated along the device column axis:
//!
//! ```text
//!   logical (4x4 tiles of 8x8)          device (8 rows x 128 cols)
//! ┌────┬────┬────┬────┐
//! │ b0 │ b0 │ b0 │ b0 │ rows 0..8     ┌────────┬────────┬────────┬────────┐
//! ├────┼────┼────┼────┤               │ band 0 │ band 1 │ band 2 │ band 3 │
//! │ b1 │ b1 │ b1 │ b1 │ rows 8..16    └────────┴────────┴────────┴────────┘
//! ├────┼────┼────┼────┤                 0..32    32..64   64..96   96..128
//! │ .. │ .. │ .. │ .. │
//! └────┴────┴────┴────┘
//! ```

mod error;
mod frame;
mod layout;
mod render;
mod sink;

pub use error::{MatrixError, MatrixResult};
pub use frame::FrameBuffer;
pub use layout::{DevicePos, TileLayout};
pub use render::{commit, show};
pub use sink::PixelSink;

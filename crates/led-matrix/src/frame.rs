//! In-memory device surface.

use crate::error::{MatrixError, MatrixResult};
use crate::layout::{DevicePos, TileLayout};
use crate::sink::PixelSink;

/// A [`PixelSink`] that keeps the device surface in memory.
///
/// Host displays draw from it; tests inspect it.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    rows: usize,
    cols: usize,
    pixels: Vec<bool>,
    /// `set_pixel` calls since creation.
    writes: u64,
    /// `present` calls since creation.
    frames: u64,
}

impl FrameBuffer {
    /// Create a dark surface sized for `layout`.
    #[must_use]
    pub fn new(layout: &TileLayout) -> Self {
        Self::with_size(layout.device_rows(), layout.device_cols())
    }

    #[must_use]
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            pixels: vec![false; rows * cols],
            writes: 0,
            frames: 0,
        }
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the pixel is lit. Off-surface addresses read dark.
    pub fn is_lit(&self, pos: DevicePos) -> bool {
        pos.row < self.rows && pos.col < self.cols && self.pixels[pos.row * self.cols + pos.col]
    }

    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Lit pixels in device row-major order.
    pub fn lit_pixels(&self) -> impl Iterator<Item = DevicePos> + '_ {
        let cols = self.cols;
        self.pixels
            .iter()
            .enumerate()
            .filter(|(_, lit)| **lit)
            .map(move |(i, _)| DevicePos::new(i / cols, i % cols))
    }

    pub const fn writes(&self) -> u64 {
        self.writes
    }

    pub const fn frames(&self) -> u64 {
        self.frames
    }
}

impl PixelSink for FrameBuffer {
    fn set_pixel(&mut self, row: usize, col: usize, on: bool) -> MatrixResult<()> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OffSurface {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.pixels[row * self.cols + col] = on;
        self.writes += 1;
        Ok(())
    }

    fn clear_all(&mut self) -> MatrixResult<()> {
        self.pixels.fill(false);
        Ok(())
    }

    fn present(&mut self) -> MatrixResult<()> {
        self.frames += 1;
        Ok(())
    }
}

//! Logical grid to device address translation.

use crate::error::{MatrixError, MatrixResult};

/// A physical pixel address on the tile chain.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, Default)]
pub struct DevicePos {
    pub row: usize,
    pub col: usize,
}

impl DevicePos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Arrangement of identical tiles forming the logical grid.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug)]
pub struct TileLayout {
    /// Pixel rows per tile.
    pub tile_height: usize,
    /// Pixel columns per tile.
    pub tile_width: usize,
    /// Tiles per logical row of tiles.
    pub tiles_across: usize,
    /// Logical rows of tiles.
    pub tiles_down: usize,
}

impl TileLayout {
    /// 32x32 grid built from a 4x4 block of 8x8 tiles.
    pub const REFERENCE: Self = Self {
        tile_height: 8,
        tile_width: 8,
        tiles_across: 4,
        tiles_down: 4,
    };

    /// Create a layout, rejecting zero-sized tiles or tile counts and
    /// surfaces too large to address.
    pub fn new(
        tile_height: usize,
        tile_width: usize,
        tiles_across: usize,
        tiles_down: usize,
    ) -> MatrixResult<Self> {
        for (field, value) in [
            ("tile_height", tile_height),
            ("tile_width", tile_width),
            ("tiles_across", tiles_across),
            ("tiles_down", tiles_down),
        ] {
            if value == 0 {
                return Err(MatrixError::EmptyLayout { field });
            }
        }
        if Self::checked_cells(tile_height, tile_width, tiles_across, tiles_down).is_none() {
            return Err(MatrixError::LayoutTooLarge);
        }

        Ok(Self {
            tile_height,
            tile_width,
            tiles_across,
            tiles_down,
        })
    }

    /// Total cell count of a layout, or `None` if any derived dimension
    /// overflows `usize`.
    pub fn checked_cells(
        tile_height: usize,
        tile_width: usize,
        tiles_across: usize,
        tiles_down: usize,
    ) -> Option<usize> {
        let grid_rows = tile_height.checked_mul(tiles_down)?;
        let grid_cols = tile_width.checked_mul(tiles_across)?;
        grid_cols.checked_mul(tiles_down)?;
        grid_rows.checked_mul(grid_cols)
    }

    pub const fn grid_rows(&self) -> usize {
        self.tile_height * self.tiles_down
    }

    pub const fn grid_cols(&self) -> usize {
        self.tile_width * self.tiles_across
    }

    pub const fn device_rows(&self) -> usize {
        self.tile_height
    }

    pub const fn device_cols(&self) -> usize {
        self.grid_cols() * self.tiles_down
    }

    /// Number of tiles in the chain.
    pub const fn tile_count(&self) -> usize {
        self.tiles_across * self.tiles_down
    }

    /// Translate a logical cell to its device address.
    ///
    /// Only defined for cells inside the logical grid.
    pub const fn map_to_device(&self, row: usize, col: usize) -> DevicePos {
        DevicePos {
            row: row % self.tile_height,
            col: (row / self.tile_height) * self.grid_cols() + col,
        }
    }

    /// Translate a device address back to its logical cell.
    pub const fn map_to_logical(&self, pos: DevicePos) -> Option<(usize, usize)> {
        if pos.row >= self.device_rows() || pos.col >= self.device_cols() {
            return None;
        }
        let band = pos.col / self.grid_cols();
        Some((band * self.tile_height + pos.row, pos.col % self.grid_cols()))
    }
}

impl Default for TileLayout {
    fn default() -> Self {
        Self::REFERENCE
    }
}

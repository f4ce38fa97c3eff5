use crate::error::MatrixResult;

/// Pixel driver for the tile chain.
///
/// Addresses are device coordinates (see [`crate::TileLayout::map_to_device`]).
pub trait PixelSink {
    /// Turn one pixel on or off.
    fn set_pixel(&mut self, row: usize, col: usize, on: bool) -> MatrixResult<()>;

    /// Turn every pixel off.
    fn clear_all(&mut self) -> MatrixResult<()>;

    /// Make pending writes visible. Drivers that latch immediately need not override.
    fn present(&mut self) -> MatrixResult<()> {
        Ok(())
    }
}

impl<S: PixelSink + ?Sized> PixelSink for &mut S {
    fn set_pixel(&mut self, row: usize, col: usize, on: bool) -> MatrixResult<()> {
        (**self).set_pixel(row, col, on)
    }

    fn clear_all(&mut self) -> MatrixResult<()> {
        (**self).clear_all()
    }

    fn present(&mut self) -> MatrixResult<()> {
        (**self).present()
    }
}

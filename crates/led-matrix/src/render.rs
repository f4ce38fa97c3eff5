//! Pushing generations to the display.

use life_core::Grid;
use tracing::trace;

use crate::error::{MatrixError, MatrixResult};
use crate::layout::TileLayout;
use crate::sink::PixelSink;

/// Render `next`, copy it into `current`, and return its live cell count.
///
/// Issues one `set_pixel` per cell in row-major order, then a single `present`.
pub fn commit<D: PixelSink + ?Sized>(
    layout: &TileLayout,
    next: &Grid,
    current: &mut Grid,
    display: &mut D,
) -> MatrixResult<usize> {
    check_shape(layout, next)?;
    check_shape(layout, current)?;

    let mut alive = 0;
    for row in 0..layout.grid_rows() {
        for col in 0..layout.grid_cols() {
            let on = next.is_alive(row, col);
            let pos = layout.map_to_device(row, col);
            display.set_pixel(pos.row, pos.col, on)?;
            if on {
                alive += 1;
            }
        }
    }
    display.present()?;
    // Only a fully rendered frame becomes current.
    current.copy_from(next);

    trace!(alive, "committed generation");
    Ok(alive)
}

/// Render `grid` without committing it anywhere.
pub fn show<D: PixelSink + ?Sized>(
    layout: &TileLayout,
    grid: &Grid,
    display: &mut D,
) -> MatrixResult<()> {
    check_shape(layout, grid)?;

    for row in 0..layout.grid_rows() {
        for col in 0..layout.grid_cols() {
            let pos = layout.map_to_device(row, col);
            display.set_pixel(pos.row, pos.col, grid.is_alive(row, col))?;
        }
    }
    display.present()
}

fn check_shape(layout: &TileLayout, grid: &Grid) -> MatrixResult<()> {
    if grid.rows() == layout.grid_rows() && grid.cols() == layout.grid_cols() {
        return Ok(());
    }
    Err(MatrixError::GridShape {
        rows: layout.grid_rows(),
        cols: layout.grid_cols(),
        found_rows: grid.rows(),
        found_cols: grid.cols(),
    })
}

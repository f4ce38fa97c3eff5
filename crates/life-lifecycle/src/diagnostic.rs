//! Visual self-tests, independent of the simulation.

use std::time::Duration;

use led_matrix::{MatrixResult, PixelSink, TileLayout};

use crate::clock::Clock;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Diagnostic {
    /// Light each full row in turn, then each full column.
    Sweep,
    /// Light one pixel at a time in row-major order.
    Dot,
}

/// Light every logical row in turn, then every logical column, clearing between each.
pub fn run_sweep<D, C>(
    layout: &TileLayout,
    display: &mut D,
    clock: &mut C,
    pause: Duration,
) -> MatrixResult<()>
where
    D: PixelSink + ?Sized,
    C: Clock + ?Sized,
{
    display.clear_all()?;
    for row in 0..layout.grid_rows() {
        for col in 0..layout.grid_cols() {
            light(layout, display, row, col)?;
        }
        display.present()?;
        clock.pause(pause);
        display.clear_all()?;
    }

    for col in 0..layout.grid_cols() {
        for row in 0..layout.grid_rows() {
            light(layout, display, row, col)?;
        }
        display.present()?;
        clock.pause(pause);
        display.clear_all()?;
    }
    display.present()
}

/// Walk a single lit pixel across the grid in row-major order.
pub fn run_dot<D, C>(
    layout: &TileLayout,
    display: &mut D,
    clock: &mut C,
    pause: Duration,
) -> MatrixResult<()>
where
    D: PixelSink + ?Sized,
    C: Clock + ?Sized,
{
    for row in 0..layout.grid_rows() {
        for col in 0..layout.grid_cols() {
            display.clear_all()?;
            light(layout, display, row, col)?;
            display.present()?;
            clock.pause(pause);
        }
    }
    display.clear_all()?;
    display.present()
}

fn light<D: PixelSink + ?Sized>(
    layout: &TileLayout,
    display: &mut D,
    row: usize,
    col: usize,
) -> MatrixResult<()> {
    let pos = layout.map_to_device(row, col);
    display.set_pixel(pos.row, pos.col, true)
}

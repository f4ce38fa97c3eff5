use std::io::Write;

use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, queue, style::Print};
use led_matrix::{FrameBuffer, MatrixError, MatrixResult, PixelSink, TileLayout};

const LIT: &str = "██";
const DARK: &str = "· ";

/// Panel emulator: keeps the device surface in a frame buffer and draws it
/// unscrambled, in logical orientation, on every `present`.
pub struct TerminalDisplay<W: Write> {
    layout: TileLayout,
    frame: FrameBuffer,
    out: W,
}

impl<W: Write> TerminalDisplay<W> {
    pub fn new(layout: TileLayout, mut out: W) -> MatrixResult<Self> {
        queue!(
            out,
            terminal::Clear(ClearType::All),
            cursor::Hide,
            terminal::SetTitle(format!(
                "LED Life - {}x{}",
                layout.grid_rows(),
                layout.grid_cols()
            ))
        )?;
        out.flush()?;

        Ok(Self {
            layout,
            frame: FrameBuffer::new(&layout),
            out,
        })
    }

    pub const fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    /// Show the cursor again and park it below the panel.
    pub fn restore(&mut self) -> MatrixResult<()> {
        let below = u16::try_from(self.layout.grid_rows()).unwrap_or(u16::MAX);
        queue!(self.out, cursor::MoveTo(0, below), cursor::Show)?;
        self.out.flush()?;
        Ok(())
    }

    /// Run `body` against the display, restoring the terminal whether it
    /// succeeds or fails.
    pub fn run_restoring<T, E>(
        &mut self,
        body: impl FnOnce(&mut Self) -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: From<MatrixError>,
    {
        let result = body(self);
        let restored = self.restore();
        let value = result?;
        restored?;
        Ok(value)
    }

    fn logical_canvas(&self) -> Vec<bool> {
        let cols = self.layout.grid_cols();
        let mut canvas = vec![false; self.layout.grid_rows() * cols];
        for pos in self.frame.lit_pixels() {
            if let Some((row, col)) = self.layout.map_to_logical(pos) {
                canvas[row * cols + col] = true;
            }
        }
        canvas
    }
}

impl<W: Write> PixelSink for TerminalDisplay<W> {
    fn set_pixel(&mut self, row: usize, col: usize, on: bool) -> MatrixResult<()> {
        self.frame.set_pixel(row, col, on)
    }

    fn clear_all(&mut self) -> MatrixResult<()> {
        self.frame.clear_all()
    }

    fn present(&mut self) -> MatrixResult<()> {
        let cols = self.layout.grid_cols();
        let canvas = self.logical_canvas();

        queue!(self.out, cursor::MoveTo(0, 0))?;
        for row in canvas.chunks(cols) {
            let line: String = row
                .iter()
                .map(|&lit| if lit { LIT } else { DARK })
                .collect();
            queue!(self.out, Print(line), cursor::MoveToNextLine(1))?;
        }
        self.out.flush()?;
        self.frame.present()
    }
}

#[cfg(test)]
mod tests {
    use led_matrix::DevicePos;

    use super::*;

    #[test]
    fn present_draws_logical_orientation() {
        let layout = TileLayout::new(2, 2, 2, 2).unwrap();
        let mut display = TerminalDisplay::new(layout, Vec::new()).unwrap();
        display.out.clear();

        // Logical (2, 0) sits in the second band of the device.
        let pos = layout.map_to_device(2, 0);
        assert_eq!(pos, DevicePos::new(0, 4));
        display.set_pixel(pos.row, pos.col, true).unwrap();
        display.present().unwrap();

        let text = String::from_utf8(display.out.clone()).unwrap();
        let lines: Vec<_> = text
            .split(|c: char| c == '\x1b')
            .map(|chunk| chunk.trim_start_matches(|c: char| c != '█' && c != '·'))
            .filter(|line| !line.is_empty())
            .collect();
        assert_eq!(
            lines,
            vec![
                "· · · · ",
                "· · · · ",
                "██· · · ",
                "· · · · "
            ]
        );
        assert_eq!(display.frame().frames(), 1);
    }

    #[test]
    fn cursor_restored_when_body_fails() {
        let layout = TileLayout::new(2, 2, 1, 1).unwrap();
        let mut display = TerminalDisplay::new(layout, Vec::new()).unwrap();
        display.out.clear();

        let result: MatrixResult<()> = display.run_restoring(|display| {
            display.set_pixel(0, 9, true)?;
            Ok(())
        });

        assert!(matches!(result, Err(MatrixError::OffSurface { .. })));
        let text = String::from_utf8(display.out.clone()).unwrap();
        assert!(text.contains("\x1b[?25h"), "cursor not shown: {text:?}");
    }

    #[test]
    fn off_surface_writes_are_rejected() {
        let layout = TileLayout::new(2, 2, 1, 1).unwrap();
        let mut display = TerminalDisplay::new(layout, Vec::new()).unwrap();

        assert!(display.set_pixel(0, 2, true).is_err());
        assert_eq!(display.frame().lit_count(), 0);
    }
}

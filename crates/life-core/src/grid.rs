use crate::error::{GridError, GridResult};

/// Row-major boolean cell grid with fixed dimensions.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Parse a pattern of `#` (alive) and `.` (dead) rows.
    pub fn parse(rows: &[&str]) -> GridResult<Self> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut grid = Self::new(rows.len(), width);
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::Ragged {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let alive = match ch {
                    '#' => true,
                    '.' => false,
                    _ => return Err(GridError::InvalidCell { row: r, col: c, ch }),
                };
                grid.set(r, c, alive);
            }
        }
        Ok(grid)
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether both grids have the same dimensions.
    pub const fn same_shape(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// Read a cell; anything outside the grid is dead.
    pub fn get(&self, row: i32, col: i32) -> bool {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return false;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    /// Read an in-range cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[self.index(row, col)]
    }

    /// Write an in-range cell.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Overwrite this grid with `other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn copy_from(&mut self, other: &Self) {
        assert!(self.same_shape(other), "grid dimensions must match");
        self.cells.copy_from_slice(&other.cells);
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Live cell coordinates in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Grid {}x{}", self.rows, self.cols)?;
        for row in self.cells.chunks(self.cols.max(1)) {
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_reads_dead() {
        let mut grid = Grid::new(3, 3);
        grid.set(0, 0, true);
        grid.set(2, 2, true);

        assert!(grid.get(0, 0));
        assert!(!grid.get(-1, 0));
        assert!(!grid.get(0, -1));
        assert!(!grid.get(3, 2));
        assert!(!grid.get(2, 3));
    }

    #[test]
    fn parse_pattern() {
        let grid = Grid::parse(&[".#.", "..#", "###"]).unwrap();

        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.count_alive(), 5);
        assert_eq!(
            grid.alive_cells().collect::<Vec<_>>(),
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn parse_rejects_bad_patterns() {
        assert_eq!(Grid::parse(&[]), Err(GridError::Empty));
        assert_eq!(
            Grid::parse(&["..", "..."]),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            Grid::parse(&[".x"]),
            Err(GridError::InvalidCell {
                row: 0,
                col: 1,
                ch: 'x'
            })
        );
    }

    #[test]
    fn copy_and_clear() {
        let source = Grid::parse(&["#.", ".#"]).unwrap();
        let mut target = Grid::new(2, 2);

        target.copy_from(&source);
        assert_eq!(target, source);

        target.clear();
        assert!(target.is_empty());
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn set_outside_panics() {
        let mut grid = Grid::new(2, 2);
        grid.set(2, 0, true);
    }
}

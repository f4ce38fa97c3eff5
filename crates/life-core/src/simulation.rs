use crate::grid::Grid;

/// Outcome of the B3/S23 rule for a given neighbour count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    /// Fewer than two neighbours.
    Solitude,
    /// More than three neighbours.
    Overcrowded,
    /// Exactly three: born or survives unconditionally.
    Populate,
    /// Exactly two: state carries over.
    Keep,
}

impl Rule {
    pub const fn classify(neighbours: u8) -> Self {
        match neighbours {
            0 | 1 => Self::Solitude,
            2 => Self::Keep,
            3 => Self::Populate,
            _ => Self::Overcrowded,
        }
    }

    /// Next state of a cell currently `alive`.
    pub const fn apply(self, alive: bool) -> bool {
        match self {
            Self::Solitude | Self::Overcrowded => false,
            Self::Populate => true,
            Self::Keep => alive,
        }
    }
}

/// Count live Moore neighbours of `(row, col)`. Cells off the grid are dead.
pub fn count_neighbours(grid: &Grid, row: usize, col: usize) -> u8 {
    let (row, col) = (row as i32, col as i32);
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dx == 0 && dy == 0 {
                continue;
            }
            if grid.get(row + dy, col + dx) {
                count += 1;
            }
        }
    }
    count
}

/// Compute the generation after `current` into `next`.
///
/// # Panics
///
/// Panics if the two grids differ in dimensions.
pub fn advance_into(current: &Grid, next: &mut Grid) {
    assert!(current.same_shape(next), "grid dimensions must match");

    for row in 0..current.rows() {
        for col in 0..current.cols() {
            let rule = Rule::classify(count_neighbours(current, row, col));
            next.set(row, col, rule.apply(current.is_alive(row, col)));
        }
    }
}

/// Compute the generation after `current`.
#[must_use]
pub fn advance(current: &Grid) -> Grid {
    let mut next = Grid::new(current.rows(), current.cols());
    advance_into(current, &mut next);
    next
}

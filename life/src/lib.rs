mod pattern;

#[cfg(test)]
mod tests;

use itertools::Itertools;

/// The state of a single cell.
///
/// `Dead = 0` and `Alive = 1` so that a `&[Cell]` can be read as bytes:
/// zero is dead, non-zero is alive.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

/// A fixed-size toroidal Game of Life board.
///
/// Cells are stored row-major (`index = row * width + col`). The board never
/// resizes; the only mutations are [`Universe::toggle_cell`],
/// [`Universe::set_cells`] and [`Universe::tick`].
#[derive(Clone, Debug)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

impl Universe {
    /// Creates an all-dead universe. Seeding a pattern is the caller's
    /// business, via [`Universe::set_cells`] or [`Universe::toggle_cell`].
    ///
    /// Panics if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "dimensions must be positive");
        let cells = vec![Cell::Dead; (width * height) as usize];
        Self {
            width,
            height,
            scratch: cells.clone(),
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The current generation, row-major. The slice borrows the universe, so
    /// it cannot be held across a later mutating call.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Marks the listed `(row, col)` cells alive.
    pub fn set_cells(&mut self, cells: &[(u32, u32)]) {
        for &(row, col) in cells {
            let i = self.index(row, col);
            self.cells[i] = Cell::Alive;
        }
    }

    /// Flips one cell; no other cell changes. Toggling the same cell twice
    /// restores its original state.
    ///
    /// Panics on out-of-range coordinates; callers clamp at the boundary.
    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        let i = self.index(row, col);
        self.cells[i] = self.cells[i].toggled();
    }

    /// Advances the whole board one generation.
    ///
    /// Neighbour counts are all taken against the previous generation: the
    /// next one is written to a scratch buffer and swapped in at the end.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let i = self.index(row, col);
                let alive = self.cells[i] == Cell::Alive;
                self.scratch[i] = match (self.live_neighbours(row, col), alive) {
                    (2 | 3, true) | (3, false) => Cell::Alive,
                    _ => Cell::Dead,
                };
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
    }

    fn index(&self, row: u32, col: u32) -> usize {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) is outside a {}x{} universe",
            self.width,
            self.height
        );
        (row * self.width + col) as usize
    }

    fn live_neighbours(&self, row: u32, col: u32) -> u8 {
        // An offset of height-1 (width-1) is -1 under the modulus, so the
        // lookup wraps around both axes.
        [self.height - 1, 0, 1]
            .into_iter()
            .cartesian_product([self.width - 1, 0, 1])
            .filter(|&d| d != (0, 0))
            .map(|(dy, dx)| {
                let row = (row + dy) % self.height;
                let col = (col + dx) % self.width;
                self.cells[(row * self.width + col) as usize] as u8
            })
            .sum()
    }
}

impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        // The scratch buffer holds a stale generation and doesn't count.
        (self.width, self.height) == (other.width, other.height) && self.cells == other.cells
    }
}

impl Eq for Universe {}

use std::collections::HashSet;

use crate::grid;
use crate::grid::Grid;

/// Cells whose state could change on the next generation.
///
/// Any cell that is *not* in the set is dead, and stays dead next generation. Keeping that true is
/// the job of whoever edits the grid: every write must [`DirtySet::mark`] the written cell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DirtySet {
    cells: HashSet<(usize, usize)>,
}

impl DirtySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the set of every live cell of `grid` along with its neighbors
    pub fn seeded(grid: &Grid) -> Self {
        let mut set = Self::new();
        set.seed(grid);

        set
    }

    /// Mark `(row, col)` and its in-bounds neighbors
    pub fn mark(&mut self, row: usize, col: usize, rows: usize, cols: usize) {
        self.cells.insert((row, col));
        self.cells.extend(grid::neighbors(row, col, rows, cols));
    }

    /// Replace the contents of the set with the live cells of `grid` and their neighbors
    pub fn seed(&mut self, grid: &Grid) {
        self.cells.clear();

        let (rows, cols) = (grid.rows(), grid.cols());
        for (row, col) in grid.live_cells() {
            self.mark(row, col, rows, cols);
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&(row, col))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().copied()
    }
}

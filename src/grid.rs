use std::fmt;

use crate::cell::State;
use crate::error::SimError;
use crate::pattern::Pattern;

/// Offsets of the 8 cells of the Moore neighborhood
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A bounded `rows x cols` matrix of cells. The grid has hard edges: nothing wraps around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,

    /// Row major
    cells: Vec<State>,
}

impl Grid {
    /// Create an all-dead grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![State::Dead; rows * cols],
        }
    }

    /// Build a grid from rows of 0/1 values. Every row must have the same length as the first,
    /// otherwise [`SimError::RaggedRows`] is returned.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, SimError> {
        let cols = rows.first().map_or(0, |r| r.len());

        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(SimError::RaggedRows {
                row,
                len: r.len(),
                cols,
            });
        }

        let cells = rows.iter().flat_map(|r| r.iter().map(|&v| State::from(v))).collect();

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Result<State, SimError> {
        let i = self.index(row, col)?;
        Ok(self.cells[i])
    }

    pub fn set(&mut self, row: usize, col: usize, state: State) -> Result<(), SimError> {
        let i = self.index(row, col)?;
        self.cells[i] = state;

        Ok(())
    }

    /// Flip a cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<State, SimError> {
        let i = self.index(row, col)?;
        self.cells[i] = self.cells[i].flip();

        Ok(self.cells[i])
    }

    pub fn fill(&mut self, state: State) {
        self.cells.fill(state);
    }

    /// Overwrite every cell with the output of `f`, in row major order
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut() -> State,
    {
        self.cells.iter_mut().for_each(|c| *c = f());
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell, in row major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(i, _)| self.xy_to(i))
    }

    /// In-bounds cells of the Moore neighborhood of `(row, col)`
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
        neighbors(row, col, self.rows, self.cols)
    }

    /// Count the live cells around `(row, col)`. Cells past the edge of the grid count as dead.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        self.neighbors(row, col)
            .filter(|&(r, c)| self.cells[self.xy_from(r, c)].is_alive())
            .count() as u8
    }

    /// Write `pattern` into the middle of the grid, at
    /// `(rows / 2 - height / 2, cols / 2 - width / 2)`. The rest of the grid is untouched.
    ///
    /// Patterns that don't fit are rejected rather than clipped.
    pub fn stamp(&mut self, pattern: &Pattern) -> Result<(), SimError> {
        let (h, w) = (pattern.height(), pattern.width());

        let too_large = || SimError::PatternTooLarge {
            name: pattern.name.to_string(),
            height: h,
            width: w,
            rows: self.rows,
            cols: self.cols,
        };

        let row0 = (self.rows / 2).checked_sub(h / 2).ok_or_else(too_large)?;
        let col0 = (self.cols / 2).checked_sub(w / 2).ok_or_else(too_large)?;

        if row0 + h > self.rows || col0 + w > self.cols {
            return Err(too_large());
        }

        for (r, line) in pattern.cells.iter().enumerate() {
            for (c, &v) in line.iter().enumerate() {
                let i = self.xy_from(row0 + r, col0 + c);
                self.cells[i] = State::from(v);
            }
        }

        Ok(())
    }

    /// Read a cell the caller knows to be in bounds
    pub(crate) fn at(&self, row: usize, col: usize) -> State {
        self.cells[self.xy_from(row, col)]
    }

    /// Write a cell the caller knows to be in bounds
    pub(crate) fn put(&mut self, row: usize, col: usize, state: State) {
        let i = self.xy_from(row, col);
        self.cells[i] = state;
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, SimError> {
        if !self.contains(row, col) {
            return Err(SimError::InvalidCoordinate {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(self.xy_from(row, col))
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n / self.cols, n % self.cols)
    }

    fn xy_from(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// In-bounds cells of the Moore neighborhood of `(row, col)` on a `rows x cols` grid
pub fn neighbors(
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = (usize, usize)> {
    NEIGHBORHOOD.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;

        (r < rows && c < cols).then_some((r, c))
    })
}

/// `#` for live cells, `.` for dead ones, one line per row
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols.max(1)) {
            for c in row {
                let ch = if c.is_alive() { '#' } else { '.' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use insta::assert_snapshot;

    use super::*;
    use crate::pattern::BLINKER;
    use crate::pattern::GLIDER;

    #[test]
    fn out_of_range_access() {
        let mut grid = Grid::new(3, 4);

        assert_eq!(
            grid.get(3, 0),
            Err(SimError::InvalidCoordinate {
                row: 3,
                col: 0,
                rows: 3,
                cols: 4
            })
        );
        assert!(grid.set(0, 4, State::Alive).is_err());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn edges_do_not_wrap() {
        let grid = Grid::from_rows(&[&[0, 0, 1], &[0, 0, 1], &[0, 0, 1]]).unwrap();

        // The live column is on the far edge, the first column sees none of it.
        assert_eq!(grid.live_neighbors(1, 0), 0);
        assert_eq!(grid.live_neighbors(1, 1), 3);
        assert_eq!(grid.live_neighbors(0, 2), 1);
        assert_eq!(grid.neighbors(0, 0).count(), 3);
    }

    #[test]
    fn stamp_centers_pattern() {
        let mut grid = Grid::new(6, 6);
        grid.stamp(&GLIDER).unwrap();

        assert_snapshot!(grid.to_string(), @r"
        ......
        ......
        ...#..
        ....#.
        ..###.
        ......
        ");
    }

    #[test]
    fn stamp_rejects_large_patterns() {
        let mut grid = Grid::new(1, 2);

        assert!(matches!(
            grid.stamp(&BLINKER),
            Err(SimError::PatternTooLarge { width: 3, .. })
        ));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn live_cells_row_major() {
        let grid = Grid::from_rows(&[&[1, 0], &[0, 1]]).unwrap();
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        assert_eq!(
            Grid::from_rows(&[&[1, 0], &[0, 1, 1], &[0]]),
            Err(SimError::RaggedRows {
                row: 1,
                len: 3,
                cols: 2
            })
        );
        assert_eq!(Grid::from_rows(&[]), Ok(Grid::new(0, 0)));
    }

    #[test]
    fn unchecked_access_matches_checked() {
        let mut grid = Grid::new(3, 5);
        grid.put(2, 4, State::Alive);
        grid.put(0, 1, State::Alive);

        assert_eq!(grid.get(2, 4), Ok(State::Alive));
        assert_eq!(grid.at(0, 1), State::Alive);
        assert_eq!(grid.at(1, 1), State::Dead);
        assert_eq!(grid.live_cells().collect::<Vec<_>>(), vec![(0, 1), (2, 4)]);
    }
}

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::dirty::DirtySet;
use crate::grid::Grid;
use crate::rule_set::RuleSet;

/// How the next generation is computed
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Recompute every cell of the grid
    FullScan,

    /// Only recompute cells in the dirty set
    #[default]
    DirtySet,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::FullScan => write!(f, "full"),
            Strategy::DirtySet => write!(f, "dirty"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "full" | "full-scan" | "fullscan" => Ok(Strategy::FullScan),
            "dirty" | "dirty-set" | "dirtyset" => Ok(Strategy::DirtySet),
            s => Err(format!("unknown strategy \"{s}\"")),
        }
    }
}

/// Compute the next generation by visiting every cell of `grid`.
pub fn full_scan(grid: &Grid, rules: &RuleSet) -> Grid {
    let mut next = Grid::new(grid.rows(), grid.cols());

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let state = rules.next(grid.at(row, col), grid.live_neighbors(row, col));

            if state.is_alive() {
                next.put(row, col, state);
            }
        }
    }

    next
}

/// Compute the next generation by visiting only the cells of `dirty`. Every other cell is dead in
/// the output.
///
/// Returns the next generation along with the dirty set to use for the one after: every live cell
/// of the output and its neighbors.
pub fn dirty_scan(grid: &Grid, rules: &RuleSet, dirty: &DirtySet) -> (Grid, DirtySet) {
    let (rows, cols) = (grid.rows(), grid.cols());

    let mut next = Grid::new(rows, cols);
    let mut next_dirty = DirtySet::new();

    for (row, col) in dirty.iter() {
        // skip stale coordinates
        if !grid.contains(row, col) {
            continue;
        }

        let state = rules.next(grid.at(row, col), grid.live_neighbors(row, col));

        if state.is_alive() {
            next.put(row, col, state);
            next_dirty.mark(row, col, rows, cols);
        }
    }

    (next, next_dirty)
}

/// Computes generation `n + 1` from generation `n` with the configured [`Strategy`].
///
/// The engine keeps the dirty set up to date whichever strategy is selected, so the strategy can
/// be switched between steps.
#[derive(Debug, Clone)]
pub struct Engine {
    strategy: Strategy,
    rules: RuleSet,
    dirty: DirtySet,
}

impl Engine {
    pub fn new(strategy: Strategy, rules: RuleSet) -> Self {
        Self {
            strategy,
            rules,
            dirty: DirtySet::new(),
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn dirty(&self) -> &DirtySet {
        &self.dirty
    }

    /// The strategy actually used by [`Engine::step`]. Rules with birth on 0 neighbors bring dead
    /// cells far from any live cell to life, which the dirty set can't track.
    pub fn effective_strategy(&self) -> Strategy {
        if self.rules.births() & 1 != 0 {
            Strategy::FullScan
        } else {
            self.strategy
        }
    }

    /// Compute the generation following `grid`
    pub fn step(&mut self, grid: &Grid) -> Grid {
        match self.effective_strategy() {
            Strategy::FullScan => {
                let next = full_scan(grid, &self.rules);
                self.dirty.seed(&next);

                trace!(visited = grid.rows() * grid.cols(), "full scan");
                next
            }
            Strategy::DirtySet => {
                let visited = self.dirty.len();
                let (next, dirty) = dirty_scan(grid, &self.rules, &self.dirty);
                self.dirty = dirty;

                trace!(visited, "dirty scan");
                next
            }
        }
    }

    /// Record an edit of `(row, col)`
    pub fn mark(&mut self, row: usize, col: usize, rows: usize, cols: usize) {
        self.dirty.mark(row, col, rows, cols);
    }

    /// Rebuild dirty tracking from scratch after a bulk edit of `grid`
    pub fn reseed(&mut self, grid: &Grid) {
        self.dirty.seed(grid);
    }

    pub fn reset(&mut self) {
        self.dirty.clear();
    }
}

use std::mem;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::cell::State;
use crate::command::Command;
use crate::command::Outcome;
use crate::config::Config;
use crate::engine::Engine;
use crate::engine::Strategy;
use crate::error::ConfigError;
use crate::error::SimError;
use crate::grid::Grid;
use crate::pattern::PatternCatalog;

/// A Game of Life simulation: the current grid, an optional snapshot of the previous one, and the
/// engine producing new generations.
///
/// The simulation is either stopped or running. Edits are only accepted while stopped, and
/// [`Simulation::advance`] only does anything while running. Nothing here schedules anything: a
/// driver is expected to call `advance` every [`Simulation::speed`] milliseconds.
pub struct Simulation {
    config: Config,
    catalog: PatternCatalog,

    grid: Grid,

    /// The grid as it was before the last advance. `None` when snapshots are turned off.
    previous: Option<Grid>,

    engine: Engine,

    running: bool,
    speed_ms: u32,
    cell_size: u32,
    generation: u64,

    rng: StdRng,
}

impl Simulation {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_catalog(config, PatternCatalog::builtin())
    }

    pub fn with_catalog(config: Config, catalog: PatternCatalog) -> Result<Self, ConfigError> {
        config.validate()?;

        let (rows, cols) = config.dimensions(config.cell_size);

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut sim = Self {
            grid: Grid::new(rows, cols),
            previous: config.track_previous.then(|| Grid::new(rows, cols)),
            engine: Engine::new(config.strategy, config.rules),
            running: false,
            speed_ms: config.speed_ms,
            cell_size: config.cell_size,
            generation: 0,
            rng,
            catalog,
            config,
        };

        if sim.config.randomize_on_start {
            sim.fill_random();
        }

        debug!(
            rows,
            cols,
            strategy = %sim.engine.strategy(),
            rules = %sim.engine.rules(),
            "simulation created"
        );

        Ok(sim)
    }

    /// Compute the next generation. Does nothing and returns `false` while stopped.
    pub fn advance(&mut self) -> bool {
        if !self.running {
            return false;
        }

        self.next_generation();
        true
    }

    /// Compute a single generation while stopped
    pub fn step(&mut self) -> Result<(), SimError> {
        self.ensure_stopped()?;
        self.next_generation();

        Ok(())
    }

    /// The current generation
    pub fn state(&self) -> &Grid {
        &self.grid
    }

    /// The grid as it was before the last advance
    pub fn previous(&self) -> Option<&Grid> {
        self.previous.as_ref()
    }

    pub fn get(&self, row: usize, col: usize) -> Result<State, SimError> {
        self.grid.get(row, col)
    }

    /// Whether the cell was alive before the last advance and is dead now. Always `false` without
    /// previous-generation snapshots.
    pub fn just_died(&self, row: usize, col: usize) -> bool {
        let Some(previous) = &self.previous else {
            return false;
        };

        let was_alive = previous.get(row, col).is_ok_and(State::is_alive);
        let is_dead = self.grid.get(row, col).is_ok_and(|s| !s.is_alive());

        was_alive && is_dead
    }

    /// Flip a single cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<State, SimError> {
        self.ensure_stopped()?;

        let state = self.grid.toggle(row, col)?;
        self.engine.mark(row, col, self.grid.rows(), self.grid.cols());

        Ok(state)
    }

    pub fn set_cell(&mut self, row: usize, col: usize, alive: bool) -> Result<(), SimError> {
        self.ensure_stopped()?;

        self.grid.set(row, col, State::from(alive))?;
        self.engine.mark(row, col, self.grid.rows(), self.grid.cols());

        Ok(())
    }

    /// Give every cell an independent 50/50 chance of being alive
    pub fn randomize(&mut self) -> Result<(), SimError> {
        self.ensure_stopped()?;
        self.fill_random();

        Ok(())
    }

    /// Kill every cell and stop the simulation. This always succeeds, running or not.
    pub fn clear(&mut self) {
        if self.running {
            debug!("clear stops the simulation");
        }

        self.running = false;
        self.grid.fill(State::Dead);
        if let Some(previous) = &mut self.previous {
            previous.fill(State::Dead);
        }
        self.engine.reset();
        self.generation = 0;
    }

    /// Clear the grid and write the named pattern in its center.
    ///
    /// If the pattern doesn't fit, the grid is left as it was.
    pub fn load_pattern(&mut self, name: &str) -> Result<(), SimError> {
        self.ensure_stopped()?;

        let pattern = self
            .catalog
            .get(name)
            .ok_or_else(|| SimError::PatternNotFound {
                name: name.to_string(),
            })?;

        let mut grid = Grid::new(self.grid.rows(), self.grid.cols());
        grid.stamp(pattern)?;

        debug!(pattern = pattern.name, "pattern loaded");

        self.grid = grid;
        self.reset_history();

        Ok(())
    }

    /// Start the simulation, immediately computing one generation. Returns `false` if it was
    /// already running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }

        debug!(generation = self.generation, "start");
        self.running = true;
        self.next_generation();

        true
    }

    /// Returns `false` if it wasn't running
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }

        debug!(generation = self.generation, "stop");
        self.running = false;

        true
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Store the delay between two generations. The simulation doesn't use it itself.
    pub fn set_speed(&mut self, speed_ms: u32) {
        self.speed_ms = speed_ms;
    }

    pub fn speed(&self) -> u32 {
        self.speed_ms
    }

    /// Change the cell size, reallocating an all-dead grid for the new dimensions and stopping the
    /// simulation. Sizes that aren't accepted for the canvas leave everything untouched.
    pub fn set_cell_size(&mut self, cell_size: u32) -> Result<(), SimError> {
        if !self.accepted_cell_sizes().contains(&cell_size) {
            warn!(cell_size, "ignoring unsupported cell size");
            return Err(SimError::InvalidCellSize { size: cell_size });
        }

        let (rows, cols) = self.config.dimensions(cell_size);

        self.running = false;
        self.cell_size = cell_size;
        self.grid = Grid::new(rows, cols);
        self.previous = self.config.track_previous.then(|| Grid::new(rows, cols));
        self.engine.reset();
        self.generation = 0;

        debug!(cell_size, rows, cols, "resized");

        Ok(())
    }

    /// Move `delta` positions along the accepted cell sizes. Returns `false`, changing nothing, if
    /// that walks off either end of the list.
    pub fn resize(&mut self, delta: isize) -> bool {
        let sizes = self.accepted_cell_sizes();

        let Some(i) = sizes.iter().position(|&s| s == self.cell_size) else {
            return false;
        };

        let Some(&size) = i.checked_add_signed(delta).and_then(|i| sizes.get(i)) else {
            return false;
        };

        self.set_cell_size(size).is_ok()
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    pub fn accepted_cell_sizes(&self) -> Vec<u32> {
        self.config.accepted_cell_sizes()
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// Number of generations computed since the grid was last cleared, randomized, loaded or
    /// resized
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn strategy(&self) -> Strategy {
        self.engine.strategy()
    }

    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.engine.set_strategy(strategy);
    }

    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome, SimError> {
        let changed = |b: bool| if b { Outcome::Applied } else { Outcome::Unchanged };

        let outcome = match command {
            Command::Toggle { row, col } => {
                self.toggle(row, col)?;
                Outcome::Applied
            }
            Command::Start => changed(self.start()),
            Command::Stop => changed(self.stop()),
            Command::Step => {
                self.step()?;
                Outcome::Applied
            }
            Command::Randomize => {
                self.randomize()?;
                Outcome::Applied
            }
            Command::Clear => {
                self.clear();
                Outcome::Applied
            }
            Command::LoadPattern(name) => {
                self.load_pattern(&name)?;
                Outcome::Applied
            }
            Command::Resize(delta) => changed(self.resize(delta)),
            Command::SetSpeed(speed_ms) => {
                self.set_speed(speed_ms);
                Outcome::Applied
            }
            Command::Exit => Outcome::Exit,
        };

        Ok(outcome)
    }

    fn ensure_stopped(&self) -> Result<(), SimError> {
        if self.running {
            debug!("edit rejected, simulation is running");
            return Err(SimError::Running);
        }

        Ok(())
    }

    fn next_generation(&mut self) {
        let next = self.engine.step(&self.grid);
        let previous = mem::replace(&mut self.grid, next);

        if let Some(snapshot) = &mut self.previous {
            *snapshot = previous;
        }

        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced"
        );
    }

    fn fill_random(&mut self) {
        let rng = &mut self.rng;
        self.grid.fill_with(|| State::from(rng.gen_bool(0.5)));

        self.reset_history();
    }

    /// After a bulk overwrite of the grid: forget the previous generation, restart the generation
    /// count and rebuild dirty tracking
    fn reset_history(&mut self) {
        if let Some(previous) = &mut self.previous {
            previous.fill(State::Dead);
        }
        self.engine.reseed(&self.grid);
        self.generation = 0;
    }
}

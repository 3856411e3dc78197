use std::env;
use std::str::FromStr;

use crate::engine::Strategy;
use crate::error::ConfigError;
use crate::rule_set::RuleSet;

pub const CANVAS_WIDTH: u32 = 600;
pub const CANVAS_HEIGHT: u32 = 600;
pub const CELL_SIZE: u32 = 20;

/// Delay between two generations, in milliseconds
pub const SPEED_MS: u32 = 100;

/// Smallest and largest (exclusive) cell size considered when listing accepted sizes
const CELL_SIZE_RANGE: std::ops::Range<u32> = 10..100;

/// Settings a [`crate::simulation::Simulation`] is built from.
#[derive(Debug, Clone)]
pub struct Config {
    /// Canvas size in pixels. Grid dimensions are `canvas / cell_size`.
    pub canvas_width: u32,
    pub canvas_height: u32,

    pub cell_size: u32,

    /// How often the driver should advance the simulation
    pub speed_ms: u32,

    pub strategy: Strategy,

    /// Keep a snapshot of the grid before the last advance
    pub track_previous: bool,

    pub rules: RuleSet,

    /// Seed for [`crate::simulation::Simulation::randomize`]. Entropy is used when `None`.
    pub seed: Option<u64>,

    /// Start from a random grid instead of an empty one
    pub randomize_on_start: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            cell_size: CELL_SIZE,
            speed_ms: SPEED_MS,
            strategy: Strategy::DirtySet,
            track_previous: true,
            rules: RuleSet::default(),
            seed: None,
            randomize_on_start: true,
        }
    }
}

impl Config {
    /// Every cell size in `10..100` that evenly divides the canvas height, smallest first.
    pub fn accepted_cell_sizes(&self) -> Vec<u32> {
        CELL_SIZE_RANGE
            .filter(|size| self.canvas_height % size == 0)
            .collect()
    }

    /// Grid dimensions `(rows, cols)` for a given cell size
    pub fn dimensions(&self, cell_size: u32) -> (usize, usize) {
        let cell_size = cell_size.max(1);

        (
            (self.canvas_height / cell_size) as usize,
            (self.canvas_width / cell_size) as usize,
        )
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    pub fn with_cell_size(mut self, cell_size: u32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_speed(mut self, speed_ms: u32) -> Self {
        self.speed_ms = speed_ms;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_previous(mut self, track_previous: bool) -> Self {
        self.track_previous = track_previous;
        self
    }

    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_random_start(mut self, randomize_on_start: bool) -> Self {
        self.randomize_on_start = randomize_on_start;
        self
    }

    /// Check that the cell size is one of [`Config::accepted_cell_sizes`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.accepted_cell_sizes().contains(&self.cell_size) {
            return Err(ConfigError::CellSize {
                size: self.cell_size,
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        Ok(())
    }

    /// Defaults, overridden by any of the `LIFE_*` environment variables that are set:
    ///
    /// * `LIFE_CANVAS_WIDTH`, `LIFE_CANVAS_HEIGHT`
    /// * `LIFE_CELL_SIZE`
    /// * `LIFE_SPEED_MS`
    /// * `LIFE_STRATEGY`: `full` or `dirty`
    /// * `LIFE_RULE`: a rulestring such as `B3/S23`
    /// * `LIFE_SEED`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Like [`Config::from_env`], reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(w) = parse_var(&lookup, "LIFE_CANVAS_WIDTH")? {
            config.canvas_width = w;
        }
        if let Some(h) = parse_var(&lookup, "LIFE_CANVAS_HEIGHT")? {
            config.canvas_height = h;
        }
        if let Some(size) = parse_var(&lookup, "LIFE_CELL_SIZE")? {
            config.cell_size = size;
        }
        if let Some(speed) = parse_var(&lookup, "LIFE_SPEED_MS")? {
            config.speed_ms = speed;
        }
        if let Some(strategy) = parse_var(&lookup, "LIFE_STRATEGY")? {
            config.strategy = strategy;
        }
        if let Some(seed) = parse_var(&lookup, "LIFE_SEED")? {
            config.seed = Some(seed);
        }
        if let Some(rule) = lookup("LIFE_RULE") {
            config.rules = rule.parse().map_err(|source| ConfigError::InvalidRule {
                var: "LIFE_RULE",
                source,
            })?;
        }

        config.validate()?;

        Ok(config)
    }
}

fn parse_var<T, F>(lookup: &F, var: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&'static str) -> Option<String>,
{
    let Some(value) = lookup(var) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue { var, value })
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::*;
    use crate::rule_set::B3S23;

    fn lookup(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<_, _> = vars.iter().map(|&(k, v)| (k, v.to_string())).collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn accepted_sizes_for_default_canvas() {
        assert_eq!(
            Config::default().accepted_cell_sizes(),
            vec![10, 12, 15, 20, 24, 25, 30, 40, 50, 60, 75]
        );
    }

    #[test]
    fn default_dimensions() {
        let config = Config::default();
        assert_eq!(config.dimensions(config.cell_size), (30, 30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("LIFE_CELL_SIZE", "10"),
            ("LIFE_STRATEGY", "full"),
            ("LIFE_SEED", "7"),
            ("LIFE_RULE", "B3/S23"),
        ]))
        .unwrap();

        assert_eq!(config.cell_size, 10);
        assert_eq!(config.strategy, Strategy::FullScan);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rules, B3S23);
    }

    #[test]
    fn env_rejects_garbage() {
        let err = Config::from_lookup(lookup(&[("LIFE_SPEED_MS", "fast")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { var: "LIFE_SPEED_MS", .. }));

        let err = Config::from_lookup(lookup(&[("LIFE_CELL_SIZE", "7")])).unwrap_err();
        assert!(matches!(err, ConfigError::CellSize { size: 7, .. }));

        let err = Config::from_lookup(lookup(&[("LIFE_RULE", "B3/S2q")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRule { .. }));
    }
}

pub mod camera;
pub mod cell;
pub mod command;
pub mod config;
pub mod dirty;
pub mod engine;
pub mod error;
pub mod grid;
pub mod pattern;
pub mod rule_set;
pub mod simulation;

pub use crate::cell::State;
pub use crate::config::Config;
pub use crate::error::SimError;
pub use crate::grid::Grid;
pub use crate::simulation::Simulation;

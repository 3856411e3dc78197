use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error("Cell ({row}, {col}) is outside of the {rows}x{cols} grid")]
    InvalidCoordinate {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("No pattern named \"{name}\"")]
    PatternNotFound { name: String },

    #[error("Pattern \"{name}\" ({height}x{width}) does not fit in the {rows}x{cols} grid")]
    PatternTooLarge {
        name: String,
        height: usize,
        width: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Row {row} has {len} cells, expected {cols}")]
    RaggedRows { row: usize, len: usize, cols: usize },

    #[error("Cell size {size} is not accepted for this canvas")]
    InvalidCellSize { size: u32 },

    /// Edits are only permitted while the simulation is stopped
    #[error("Simulation is running")]
    Running,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Rule string is empty")]
    Empty,

    #[error("Invalid character '{got}' in rule string")]
    InvalidChar { got: char },

    #[error("Neighbor count {got} is larger than 8")]
    OutOfRange { got: u32 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value \"{value}\" for {var}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Invalid rule in {var}: {source}")]
    InvalidRule {
        var: &'static str,
        #[source]
        source: RuleError,
    },

    #[error("Cell size {size} does not divide the {width}x{height} canvas")]
    CellSize { size: u32, width: u32, height: u32 },
}

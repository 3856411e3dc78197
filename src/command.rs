/// Discrete requests a driver sends to a [`crate::simulation::Simulation`]. Drivers translate
/// whatever input they receive (keys, clicks, timers) into these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle { row: usize, col: usize },
    Start,
    Stop,

    /// Advance a single generation while stopped
    Step,

    Randomize,
    Clear,
    LoadPattern(String),

    /// Move `n` positions along the list of accepted cell sizes
    Resize(isize),

    SetSpeed(u32),

    /// Exit the application
    Exit,
}

/// What came of a [`Command`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,

    /// The command was valid but had nothing to do
    Unchanged,

    Exit,
}

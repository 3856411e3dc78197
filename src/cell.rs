/// The state of a single cell of the grid.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum State {
    #[default]
    Dead,
    Alive,
}

impl State {
    pub const fn is_alive(self) -> bool {
        matches!(self, State::Alive)
    }

    /// Return the opposite state
    pub const fn flip(self) -> Self {
        match self {
            State::Dead => State::Alive,
            State::Alive => State::Dead,
        }
    }
}

impl From<bool> for State {
    fn from(alive: bool) -> Self {
        if alive { State::Alive } else { State::Dead }
    }
}

impl From<State> for bool {
    fn from(state: State) -> Self {
        state.is_alive()
    }
}

/// Pattern matrices are written as 0/1. Anything that isn't `0` is alive.
impl From<u8> for State {
    fn from(value: u8) -> Self {
        State::from(value != 0)
    }
}

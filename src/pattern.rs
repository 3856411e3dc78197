use crate::cell::State;

/// A named, fixed matrix of 0/1 values used to seed the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [&'static [u8]],
}

impl Pattern {
    pub fn height(&self) -> usize {
        self.cells.len()
    }

    /// Width of the widest row
    pub fn width(&self) -> usize {
        self.cells.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Offsets `(row, col)` of every live cell, relative to the top left corner.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| State::from(v).is_alive())
                .map(move |(c, _)| (r, c))
        })
    }
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[&[0, 1, 0], &[0, 0, 1], &[1, 1, 1]],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[&[1, 1, 1]],
};

pub const BLOCK: Pattern = Pattern {
    name: "Block",
    cells: &[&[1, 1], &[1, 1]],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[&[1, 1, 0, 0], &[1, 1, 0, 0], &[0, 0, 1, 1], &[0, 0, 1, 1]],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[&[0, 1, 1, 1], &[1, 1, 1, 0]],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 1],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 1, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0],
    ],
};

/// Lightweight spaceship
pub const LWSS: Pattern = Pattern {
    name: "LWSS",
    cells: &[
        &[0, 1, 0, 0, 1],
        &[1, 0, 0, 0, 0],
        &[1, 0, 0, 0, 1],
        &[1, 1, 1, 1, 0],
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[&[0, 1, 1], &[1, 1, 0], &[0, 1, 0]],
};

pub const DIEHARD: Pattern = Pattern {
    name: "Diehard",
    cells: &[
        &[0, 0, 0, 0, 0, 0, 1, 0],
        &[1, 1, 0, 0, 0, 0, 0, 0],
        &[0, 1, 0, 0, 0, 1, 1, 1],
    ],
};

pub const ACORN: Pattern = Pattern {
    name: "Acorn",
    cells: &[
        &[0, 1, 0, 0, 0, 0, 0],
        &[0, 0, 0, 1, 0, 0, 0],
        &[1, 1, 0, 0, 1, 1, 1],
    ],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1],
        &[1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
        &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    ],
};

const BUILTIN: &[Pattern] = &[
    GLIDER,
    BLINKER,
    BLOCK,
    BEACON,
    TOAD,
    PULSAR,
    LWSS,
    R_PENTOMINO,
    DIEHARD,
    ACORN,
    GOSPER_GLIDER_GUN,
];

/// Immutable lookup table of patterns, handed to a [`crate::simulation::Simulation`] when it is
/// built.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PatternCatalog {
    pub fn builtin() -> Self {
        Self::new(BUILTIN.to_vec())
    }

    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Look up a pattern by name, ignoring ASCII case
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.patterns.iter().map(|p| p.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

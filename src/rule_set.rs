use std::fmt;
use std::str::FromStr;

use crate::cell::State;
use crate::error::RuleError;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
///
/// b0s0:                 0000_0000_0000_0000_0000_0000_0000_0000
/// b012345678s012345678: 0000_0001_1111_1111_0000_0001_1111_1111
/// ```
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// Create a new `RuleSet` for the given births and survivals. For both `b` and
    /// `s`, numbers are set on a bit basis. For instance if bit `i` in `b` is on, it
    /// means `i` is included in the set of births. Any bit past the 8th is ignored.
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// The state of a cell in the next generation, given its current state and its number of live
    /// neighbors.
    pub fn next(&self, state: State, neighbors: u8) -> State {
        let n = 1u16.checked_shl(neighbors as u32).unwrap_or(0);

        let mask = match state {
            State::Alive => self.survivals(),
            State::Dead => self.births(),
        };

        State::from(n & mask != 0)
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |mask: u16| -> String {
            (0..=8)
                .filter(|i| mask & (1 << i) != 0)
                .map(|i| char::from(b'0' + i as u8))
                .collect()
        };

        write!(f, "B{}/S{}", digits(self.births()), digits(self.survivals()))
    }
}

impl FromStr for RuleSet {
    type Err = RuleError;

    /// Accepts `b3s23`, `B3/S23` and similar forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum Section {
            Birth,
            Survival,
        }

        if s.trim().is_empty() {
            return Err(RuleError::Empty);
        }

        let mut section = Section::Birth;
        let (mut b, mut s_) = (0u16, 0u16);

        for c in s.trim().chars() {
            match c {
                'b' | 'B' => section = Section::Birth,
                's' | 'S' => section = Section::Survival,
                '/' => section = Section::Survival,
                c => {
                    let n = c.to_digit(10).ok_or(RuleError::InvalidChar { got: c })?;

                    if n > 8 {
                        return Err(RuleError::OutOfRange { got: n });
                    }

                    match section {
                        Section::Birth => b |= 1 << n,
                        Section::Survival => s_ |= 1 << n,
                    }
                }
            }
        }

        Ok(RuleSet::new(b, s_))
    }
}

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// The largest number of neighbors a cell can have.
pub const MAX_NEIGHBORS: u8 = 8;

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
#[derive(Clone, Copy, PartialEq, Eq)]
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
    ///
    /// Big endian is used here (i.e. `b = 0b1` means b1, and `b = 0b1_0000_0000` means b8).
    pub const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: (b as u32) << 16 | s as u32,
        }
    }

    pub const fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub const fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// Whether a live cell with `neighbors` live neighbors stays alive.
    pub const fn survives(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.survivals() & (1 << neighbors) != 0
    }

    /// Whether a dead cell with `neighbors` live neighbors comes alive.
    pub const fn born(&self, neighbors: u8) -> bool {
        neighbors <= MAX_NEIGHBORS && self.births() & (1 << neighbors) != 0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    #[error("Neighbor count {0} is out of range, expected 0 through 8")]
    OutOfRange(u32),

    #[error("Unrecognized character '{0}' in rule")]
    InvalidChar(char),
}

/// Parses rules that look like `b3s23` or `B3/S23`.
impl FromStr for RuleSet {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        enum State {
            Birth,
            Survival,
        }

        let mut state = State::Birth;
        let (mut births, mut survivals) = (0u16, 0u16);

        for c in s.trim().chars() {
            match c {
                'b' | 'B' => {
                    state = State::Birth;
                }
                's' | 'S' => {
                    state = State::Survival;
                }
                '/' => {}
                n => {
                    let n = n.to_digit(10).ok_or(RuleError::InvalidChar(n))?;

                    if n > MAX_NEIGHBORS as u32 {
                        return Err(RuleError::OutOfRange(n));
                    }

                    match state {
                        State::Survival => {
                            survivals |= 1 << n;
                        }
                        State::Birth => {
                            births |= 1 << n;
                        }
                    }
                }
            }
        }

        Ok(RuleSet::new(births, survivals))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for n in (0..=MAX_NEIGHBORS).filter(|&n| self.born(n)) {
            write!(f, "{n}")?;
        }

        write!(f, "/S")?;
        for n in (0..=MAX_NEIGHBORS).filter(|&n| self.survives(n)) {
            write!(f, "{n}")?;
        }

        Ok(())
    }
}

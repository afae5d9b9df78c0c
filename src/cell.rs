use std::fmt;
use std::str::FromStr;

use crate::world::WorldError;

/// The state of a single grid cell.
///
/// Stored as a `u8` so that a row of cells reads back as the familiar `0`/`1` matrix.
#[repr(u8)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub const fn is_alive(self) -> bool {
        matches!(self, Cell::Alive)
    }

    pub const fn from_alive(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }

    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        cell.as_u8()
    }
}

impl TryFrom<u8> for Cell {
    type Error = WorldError;

    fn try_from(state: u8) -> Result<Self, Self::Error> {
        match state {
            0 => Ok(Cell::Dead),
            1 => Ok(Cell::Alive),
            _ => Err(WorldError::InvalidCellState {
                state: state.to_string(),
            }),
        }
    }
}

/// Only the literal strings `0` and `1` are cell states. In particular `true` and `false` are not.
impl FromStr for Cell {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "0" => Ok(Cell::Dead),
            "1" => Ok(Cell::Alive),
            other => Err(WorldError::InvalidCellState {
                state: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            Cell::Dead => '.',
            Cell::Alive => 'o',
        };

        write!(f, "{c}")
    }
}

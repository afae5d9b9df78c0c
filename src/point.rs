use std::fmt;
use std::str::FromStr;

use crate::Coord;
use crate::parse_util;
use crate::world::WorldError;

/// A cell address. `x` selects the row, `y` the column within that row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// The up to 8 positions around this one, in row-major order. Some may be off the grid.
    pub fn neighbors(self) -> impl Iterator<Item = Position> {
        (-1..=1)
            .flat_map(move |dx| (-1..=1).map(move |dy| (dx, dy)))
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dx, dy)| {
                Some(Position::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
            })
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

/// Parses positions that look like `1,2`.
impl FromStr for Position {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = parse_util::convert_pair(',', s)
            .map_err(|_| WorldError::InvalidCoordinate { got: s.to_string() })?;

        Ok(Self { x, y })
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The extent of a grid: `height` rows of `width` cells. Both are always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        let invalid = || WorldError::InvalidDimensions {
            got: format!("{width}x{height}"),
        };

        if width == 0 || height == 0 {
            return Err(invalid());
        }

        // The buffer must be addressable, and every coordinate must fit in a `Coord`.
        let len = width.checked_mul(height).ok_or_else(invalid)?;
        if len > Coord::MAX as usize {
            return Err(invalid());
        }

        Ok(Self { width, height })
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in a grid of this size.
    pub const fn len(&self) -> usize {
        self.width * self.height
    }

    /// Flat row-major index of `pos`, or `None` if it falls outside.
    pub fn index(&self, pos: Position) -> Option<usize> {
        let x = usize::try_from(pos.x).ok().filter(|&x| x < self.height)?;
        let y = usize::try_from(pos.y).ok().filter(|&y| y < self.width)?;

        Some(x * self.width + y)
    }
}

/// Parses dimensions that look like `8x6`, width first.
impl FromStr for Dimensions {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = parse_util::convert_pair('x', s)
            .map_err(|_| WorldError::InvalidDimensions { got: s.to_string() })?;

        Self::new(width, height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

use std::fmt;

use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::Coord;
use crate::cell::Cell;
use crate::point::Dimensions;
use crate::point::Position;
use crate::rule_set::RuleSet;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorldError {
    #[error("Must provide valid positive integer dimensions, got \"{got}\"")]
    InvalidDimensions { got: String },

    #[error("Cell position must be valid integer coordinates, got \"{got}\"")]
    InvalidCoordinate { got: String },

    #[error("Cell {pos:?} is outside the bounds of the {dims} grid")]
    OutOfBounds { pos: Position, dims: Dimensions },

    #[error("Cell state must be set to 0 or 1, got \"{state}\"")]
    InvalidCellState { state: String },
}

/// A dense, finite Life grid.
///
/// Cells are addressed as `(x, y)` where `x` picks one of `height` rows and `y` one of `width`
/// columns. Anything past the edge is dead; the grid does not wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    /// Life rules
    rules: RuleSet,

    /// Size of the grid. `buf` always holds exactly `dims.len()` cells.
    dims: Dimensions,

    /// Row-major cell buffer
    buf: Vec<Cell>,

    /// Number of ticks applied since creation
    generation: u64,
}

impl World {
    /// Create a dead `width` by `height` world running Conway's rules.
    pub fn new(width: usize, height: usize) -> Result<Self, WorldError> {
        Self::with_rules(width, height, RuleSet::default())
    }

    pub fn with_rules(width: usize, height: usize, rules: RuleSet) -> Result<Self, WorldError> {
        let dims = Dimensions::new(width, height)?;

        debug!(%dims, %rules, "creating world");

        Ok(Self {
            rules,
            dims,
            buf: vec![Cell::Dead; dims.len()],
            generation: 0,
        })
    }

    /// Build a world from literal rows of `0`s and `1`s. Every row must have the same, non-zero,
    /// length.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, WorldError> {
        let width = rows.first().map_or(0, |row| row.as_ref().len());
        let mut world = Self::new(width, rows.len())?;

        for (x, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(WorldError::InvalidDimensions {
                    got: format!("row {x} has {} cells, expected {width}", row.len()),
                });
            }

            for (y, &state) in row.iter().enumerate() {
                world.buf[x * width + y] = Cell::try_from(state)?;
            }
        }

        Ok(world)
    }

    pub fn width(&self) -> usize {
        self.dims.width()
    }

    pub fn height(&self) -> usize {
        self.dims.height()
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Reallocate the grid, keeping every cell that lies inside both the old and the new extent.
    /// Everything else in the new grid starts dead.
    pub fn resize(&mut self, width: usize, height: usize) -> Result<(), WorldError> {
        let dims = Dimensions::new(width, height)?;
        let mut buf = vec![Cell::Dead; dims.len()];

        let rows = dims.height().min(self.height());
        let cols = dims.width().min(self.width());

        for x in 0..rows {
            let old = &self.buf[x * self.width()..][..cols];
            buf[x * width..][..cols].copy_from_slice(old);
        }

        debug!(from = %self.dims, to = %dims, "resized world");

        self.dims = dims;
        self.buf = buf;

        Ok(())
    }

    /// A copy of the whole grid, one `Vec` per row.
    pub fn grid(&self) -> Vec<Vec<u8>> {
        self.rows()
            .map(|row| row.iter().copied().map(u8::from).collect())
            .collect()
    }

    /// Borrow the grid row by row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.buf.chunks_exact(self.width())
    }

    /// The flat row-major buffer.
    pub fn cells(&self) -> &[Cell] {
        &self.buf
    }

    /// Set the cell at `(x, y)` to `state`, which must be `0` or `1`.
    pub fn set_cell(&mut self, x: Coord, y: Coord, state: u8) -> Result<(), WorldError> {
        let index = self.index(x, y)?;
        let cell = Cell::try_from(state)?;

        trace!(x, y, state, "set cell");
        self.buf[index] = cell;

        Ok(())
    }

    pub fn set(&mut self, x: Coord, y: Coord, cell: Cell) -> Result<(), WorldError> {
        self.set_cell(x, y, cell.as_u8())
    }

    pub fn get(&self, x: Coord, y: Coord) -> Result<Cell, WorldError> {
        Ok(self.buf[self.index(x, y)?])
    }

    pub fn is_cell_alive(&self, x: Coord, y: Coord) -> Result<bool, WorldError> {
        Ok(self.get(x, y)?.is_alive())
    }

    /// Count the live cells among the (up to) 8 around `(x, y)`. The cell itself never counts.
    pub fn count_cell_neighbors(&self, x: Coord, y: Coord) -> Result<u8, WorldError> {
        self.index(x, y)?;

        Ok(self.live_neighbors(Position::new(x, y)))
    }

    /// Whether `(x, y)` is alive and stays alive next generation.
    pub fn cell_survives(&self, x: Coord, y: Coord) -> Result<bool, WorldError> {
        let neighbors = self.count_cell_neighbors(x, y)?;

        Ok(self.is_cell_alive(x, y)? && self.rules.survives(neighbors))
    }

    /// Whether `(x, y)` is dead and comes alive next generation.
    pub fn cell_is_born(&self, x: Coord, y: Coord) -> Result<bool, WorldError> {
        let neighbors = self.count_cell_neighbors(x, y)?;

        Ok(!self.is_cell_alive(x, y)? && self.rules.born(neighbors))
    }

    /// Advance the world by one generation.
    ///
    /// The next generation is computed into a fresh buffer from the current one, then swapped in,
    /// so no cell ever sees a neighbor's updated state.
    pub fn next_tick(&mut self) {
        let next: Vec<Cell> = self
            .buf
            .iter()
            .enumerate()
            .map(|(i, &cell)| {
                let neighbors = self.live_neighbors(self.position(i));

                let alive = match cell {
                    Cell::Alive => self.rules.survives(neighbors),
                    Cell::Dead => self.rules.born(neighbors),
                };

                Cell::from_alive(alive)
            })
            .collect();

        self.buf = next;
        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.population(),
            "advanced world"
        );
    }

    /// Advance the world by `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.next_tick();
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.buf.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Kill every cell, keeping the current size.
    pub fn clear(&mut self) {
        self.buf.fill(Cell::Dead);
    }

    fn index(&self, x: Coord, y: Coord) -> Result<usize, WorldError> {
        let pos = Position::new(x, y);

        self.dims.index(pos).ok_or(WorldError::OutOfBounds {
            pos,
            dims: self.dims,
        })
    }

    // `Dimensions` caps the cell count at `Coord::MAX`, so these casts never truncate.
    fn position(&self, index: usize) -> Position {
        let w = self.width();

        Position::new((index / w) as Coord, (index % w) as Coord)
    }

    fn live_neighbors(&self, pos: Position) -> u8 {
        pos.neighbors()
            .filter_map(|n| self.dims.index(n))
            .filter(|&i| self.buf[i].is_alive())
            .count() as u8
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

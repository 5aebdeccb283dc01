//! Rectangular battlefield grid
//!
//! Each point holds exactly one `Cell`. Units live in the roster; a cell only
//! carries the handle of the unit standing on it.

use serde::{Deserialize, Serialize};

use crate::battle::constants::{EMPTY_SYMBOL, WALL_SYMBOL};
use crate::core::error::{Result, SkirmishError};
use crate::core::types::{Point, UnitId};

/// Contents of a single grid square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    Wall,
    #[default]
    Empty,
    Unit(UnitId),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn unit(&self) -> Option<UnitId> {
        match self {
            Cell::Unit(id) => Some(*id),
            _ => None,
        }
    }
}

/// Fixed-size 2D grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: usize,
    pub height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid of open floor
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
        }
    }

    #[inline]
    fn index(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(point.y as usize * self.width + point.x as usize)
        } else {
            None
        }
    }

    #[inline]
    pub fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as usize) < self.width
            && (point.y as usize) < self.height
    }

    pub fn get(&self, point: Point) -> Result<Cell> {
        self.index(point)
            .map(|i| self.cells[i])
            .ok_or(SkirmishError::OutOfBounds(point))
    }

    /// Replace the cell at `point`
    ///
    /// Keeping a unit on at most one square is the caller's job.
    pub fn set(&mut self, point: Point, cell: Cell) -> Result<()> {
        let i = self.index(point).ok_or(SkirmishError::OutOfBounds(point))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Is `point` inside the grid and open floor?
    #[inline]
    pub fn is_open(&self, point: Point) -> bool {
        matches!(self.get(point), Ok(Cell::Empty))
    }

    /// In-bounds neighbours of `point` in the fixed order up, left, right, down
    pub fn neighbors(&self, point: Point) -> Vec<(Point, Cell)> {
        point
            .adjacent()
            .into_iter()
            .filter_map(|p| self.index(p).map(|i| (p, self.cells[i])))
            .collect()
    }

    /// All points in reading order
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x as i32, y as i32)))
    }

    /// Occupied squares in reading order
    pub fn occupants(&self) -> impl Iterator<Item = (Point, UnitId)> + '_ {
        self.points()
            .zip(self.cells.iter())
            .filter_map(|(p, cell)| cell.unit().map(|id| (p, id)))
    }

    /// Map symbol for non-unit cells; units are drawn by the caller
    pub fn terrain_symbol(cell: Cell) -> Option<char> {
        match cell {
            Cell::Wall => Some(WALL_SYMBOL),
            Cell::Empty => Some(EMPTY_SYMBOL),
            Cell::Unit(_) => None,
        }
    }
}

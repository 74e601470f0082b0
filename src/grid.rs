use crate::{Error, Result};
use boolinator::Boolinator;
use itertools::Itertools;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "snapshot")]
use serde::{Deserialize, Serialize};

/// A square matrix of alive/dead cells.
///
/// Cells are addressed by `(x, y)` with both coordinates in `[0, side)`. The grid does not wrap, so
/// the cells on the border simply have fewer neighbors.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "snapshot",
    derive(Serialize, Deserialize),
    serde(try_from = "RawGrid")
)]
pub struct Grid {
    side: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "snapshot")]
#[derive(Serialize, Deserialize)]
struct RawGrid {
    side: usize,
    cells: Vec<bool>,
}

#[cfg(feature = "snapshot")]
impl std::convert::TryFrom<RawGrid> for Grid {
    type Error = Error;

    fn try_from(raw: RawGrid) -> Result<Self> {
        Grid::from_cells(raw.side, raw.cells)
    }
}

impl Grid {
    /// Make a new grid with every cell dead.
    ///
    /// Panics if `side` is zero.
    pub fn new(side: usize) -> Self {
        assert!(side >= 1, "grid is empty, which isnt allowed");
        Grid {
            side,
            cells: vec![false; side * side],
        }
    }

    /// Make a grid from row-major cells, where the cell `(x, y)` lives at `y * side + x`.
    pub fn from_cells(side: usize, cells: Vec<bool>) -> Result<Self> {
        if side == 0 {
            return Err(Error::EmptyGrid);
        }
        if side.checked_mul(side) != Some(cells.len()) {
            return Err(Error::MalformedSnapshot {
                side,
                cells: cells.len(),
            });
        }
        Ok(Grid { side, cells })
    }

    /// Make a grid by evaluating each coordinate to a cell with a closure.
    ///
    /// Panics if `side` is zero.
    pub fn from_fn<F>(side: usize, mut coord_map: F) -> Self
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut grid = Self::new(side);
        for (y, x) in (0..side).cartesian_product(0..side) {
            grid.cells[y * side + x] = coord_map(x, y);
        }
        grid
    }

    /// Make a grid using a collection of coordinates that indicate alive cells.
    pub fn from_alive<I>(side: usize, coords: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::new(side);
        for (x, y) in coords {
            grid.set(x, y, true)?;
        }
        Ok(grid)
    }

    /// Get the index of a coordinate, if it is on the grid.
    #[inline]
    pub fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.side && y < self.side).as_some(y * self.side + x)
    }

    /// Offset a coordinate to the index of another cell. Unlike a toroidal grid, stepping off an
    /// edge gives `None`.
    #[inline]
    pub fn delta_index(&self, x: usize, y: usize, delta: (isize, isize)) -> Option<usize> {
        let nx = x as isize + delta.0;
        let ny = y as isize + delta.1;
        (nx >= 0 && ny >= 0)
            .as_option()
            .and_then(|()| self.index_of(nx as usize, ny as usize))
    }

    #[inline]
    fn checked_index(&self, x: usize, y: usize) -> Result<usize> {
        self.index_of(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            side: self.side,
        })
    }

    /// Get a cell.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<bool> {
        self.checked_index(x, y).map(|ix| self.cells[ix])
    }

    /// Set a cell, returning its previous state.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, alive: bool) -> Result<bool> {
        let ix = self.checked_index(x, y)?;
        Ok(std::mem::replace(&mut self.cells[ix], alive))
    }

    /// Get the Grid's side length.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Get the Grid's size.
    #[inline]
    pub fn size(&self) -> usize {
        self.side * self.side
    }

    /// Get the Grid's Cell slice.
    #[inline]
    pub fn cells(&self) -> &[bool] {
        &self.cells[..]
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells[..]
    }

    /// Number of alive cells.
    pub fn count_active(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Iterate over the coordinates of the alive cells in row-major order.
    pub fn alive(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.side;
        self.cells
            .iter()
            .positions(|&c| c)
            .map(move |ix| (ix % side, ix / side))
    }

    /// Fails with `DimensionMismatch` unless `other` has the same side length.
    pub fn ensure_same_side(&self, other: &Grid) -> Result<()> {
        if self.side == other.side {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected: self.side,
                found: other.side,
            })
        }
    }

    /// Encode the grid so it can be carried across a re-render.
    #[cfg(feature = "snapshot")]
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a grid produced by `to_bytes`.
    #[cfg(feature = "snapshot")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: RawGrid = bincode::deserialize(bytes)?;
        Grid::from_cells(raw.side, raw.cells)
    }
}

/// Panics if out of bounds.
impl Index<(usize, usize)> for Grid {
    type Output = bool;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &bool {
        assert!(
            x < self.side && y < self.side,
            "cell ({}, {}) is outside of a {}x{} grid",
            x,
            y,
            self.side,
            self.side
        );
        &self.cells[y * self.side + x]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.side) {
            let line: String = row.iter().map(|&c| if c { 'o' } else { '.' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the `Display` form: one line per row, `o` for alive and `.` for dead.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let side = rows.len();
        if side == 0 {
            return Err(Error::Parse("no rows".to_owned()));
        }
        let mut cells = Vec::with_capacity(side * side);
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != side {
                return Err(Error::Parse(format!(
                    "row {} is not {} cells wide",
                    y, side
                )));
            }
            for c in row.chars() {
                match c {
                    'o' => cells.push(true),
                    '.' => cells.push(false),
                    _ => return Err(Error::Parse(format!("unexpected character {}", c))),
                }
            }
        }
        Grid::from_cells(side, cells)
    }
}

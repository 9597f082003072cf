//! Board coordinate representation.

use crate::BOARD_SIZE;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building a coordinate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid coordinate '{0}': expected \"row,col\"")]
    Malformed(String),
}

/// A square on the board, addressed by zero-based row and column.
///
/// Both components are always in `0..BOARD_SIZE`; the only ways to build a
/// `Coord` check this.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Creates a coordinate, or `None` if either component is off the board.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coord {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Returns the row (0-5).
    #[inline]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Returns the column (0-5).
    #[inline]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Returns the row-major index (0-35).
    #[inline]
    pub const fn index(self) -> usize {
        self.row() * BOARD_SIZE + self.col()
    }

    /// Iterates over all 36 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).filter_map(move |col| Coord::new(row, col)))
    }

    /// Returns the distance to `other` along the single axis they share.
    ///
    /// `None` if the coordinates are equal or differ in both row and column.
    pub fn distance(self, other: Coord) -> Option<usize> {
        match (self.row == other.row, self.col == other.col) {
            (true, false) => Some(self.col.abs_diff(other.col) as usize),
            (false, true) => Some(self.row.abs_diff(other.row) as usize),
            _ => None,
        }
    }

    /// Returns the coordinate `steps` squares away in the given direction, if
    /// it is still on the board.
    pub fn offset(self, d_row: isize, d_col: isize, steps: usize) -> Option<Coord> {
        let steps = isize::try_from(steps).ok()?;
        let row = (self.row as isize).checked_add(d_row.checked_mul(steps)?)?;
        let col = (self.col as isize).checked_add(d_col.checked_mul(steps)?)?;
        Coord::new(usize::try_from(row).ok()?, usize::try_from(col).ok()?)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or(CoordError::OutOfBounds { row, col })
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row(), coord.col())
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    /// Parses `"row,col"`, e.g. `"2,3"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordError::Malformed(s.to_string());
        let (row, col) = s.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse::<usize>().map_err(|_| malformed())?;
        let col = col.trim().parse::<usize>().map_err(|_| malformed())?;
        Coord::try_from((row, col))
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({},{})", self.row, self.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

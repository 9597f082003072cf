//! Move representation.

use crate::{Coord, CoordError};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when parsing move notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("invalid move '{0}': expected \"from>to xN\" or \"*>to\"")]
    Malformed(String),

    #[error("invalid square in move: {0}")]
    InvalidSquare(#[from] CoordError),

    #[error("invalid piece count '{0}'")]
    InvalidCount(String),
}

/// A move in the game.
///
/// Moves are plain requests: building one does not check that it is legal.
/// The engine validates them against the current game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Move the top `count` pieces of the stack at `from` onto `to`.
    Stack { from: Coord, to: Coord, count: usize },
    /// Place one piece from the mover's reserve onto `to`.
    Reserve { to: Coord },
}

impl Move {
    /// Creates a stack move.
    #[inline]
    pub const fn stack(from: Coord, to: Coord, count: usize) -> Self {
        Move::Stack { from, to, count }
    }

    /// Creates a reserve move.
    #[inline]
    pub const fn reserve(to: Coord) -> Self {
        Move::Reserve { to }
    }

    /// Returns the destination square.
    #[inline]
    pub const fn to(self) -> Coord {
        match self {
            Move::Stack { to, .. } | Move::Reserve { to } => to,
        }
    }

    /// Returns the source square, or `None` for a reserve move.
    #[inline]
    pub const fn from(self) -> Option<Coord> {
        match self {
            Move::Stack { from, .. } => Some(from),
            Move::Reserve { .. } => None,
        }
    }

    /// Returns true if this move plays a piece from reserve.
    #[inline]
    pub const fn is_reserve(self) -> bool {
        matches!(self, Move::Reserve { .. })
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || NotationError::Malformed(s.to_string());
        let (src, rest) = s.trim().split_once('>').ok_or_else(malformed)?;

        if src.trim() == "*" {
            let to = rest.parse::<Coord>()?;
            return Ok(Move::reserve(to));
        }

        let (dst, count) = rest.split_once('x').ok_or_else(malformed)?;
        let from = src.parse::<Coord>()?;
        let to = dst.parse::<Coord>()?;
        let count = count
            .trim()
            .parse::<usize>()
            .map_err(|_| NotationError::InvalidCount(count.trim().to_string()))?;
        Ok(Move::stack(from, to, count))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Stack { from, to, count } => write!(f, "{}>{}x{}", from, to, count),
            Move::Reserve { to } => write!(f, "*>{}", to),
        }
    }
}

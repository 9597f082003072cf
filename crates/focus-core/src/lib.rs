//! Core types for Focus.
//!
//! This crate provides the fundamental types used across the Focus engine:
//! - [`Color`] and [`Piece`] for piece representation
//! - [`Coord`] for board coordinates
//! - [`Move`] for move representation and its text notation
//!
//! Board geometry is fixed: a 6x6 grid whose stacks hold at most
//! [`MAX_STACK_HEIGHT`] pieces.

mod color;
mod coord;
mod mov;
mod piece;

pub use color::Color;
pub use coord::{Coord, CoordError};
pub use mov::{Move, NotationError};
pub use piece::Piece;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 6;

/// Tallest stack allowed once a placement has been reconciled.
pub const MAX_STACK_HEIGHT: usize = 5;

/// Captured pieces needed to win the game.
pub const CAPTURES_TO_WIN: usize = 6;

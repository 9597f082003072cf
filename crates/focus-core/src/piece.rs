//! Piece representation.

use crate::Color;

/// A single piece on the board or in a player's pool.
///
/// Pieces carry no identity beyond their color, so two pieces of the same
/// color are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece(Color);

impl Piece {
    pub const RED: Piece = Piece(Color::Red);
    pub const GREEN: Piece = Piece(Color::Green);

    /// Creates a piece of the given color.
    #[inline]
    pub const fn new(color: Color) -> Self {
        Piece(color)
    }

    /// Returns the color of this piece.
    #[inline]
    pub const fn color(self) -> Color {
        self.0
    }

    /// Returns true if this piece has the given color.
    #[inline]
    pub fn is(self, color: Color) -> bool {
        self.0 == color
    }
}

impl From<Color> for Piece {
    fn from(color: Color) -> Self {
        Piece(color)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_char())
    }
}

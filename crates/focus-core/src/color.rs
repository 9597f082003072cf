//! Piece color representation.

use serde::{Deserialize, Serialize};

/// The two piece colors, one per player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Green = 1,
}

impl Color {
    /// Both colors in order.
    pub const ALL: [Color; 2] = [Color::Red, Color::Green];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Green,
            Color::Green => Color::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Green).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the single-character form used in board diagrams.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Green => write!(f, "Green"),
        }
    }
}

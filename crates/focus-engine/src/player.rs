//! Player identities and the per-player piece ledger.

use crate::GameError;
use focus_core::{Color, Piece};
use serde::Deserialize;

/// Stable handle for one of the two players.
///
/// The engine stores both [`Player`] records in seat order and addresses them
/// by this handle; names are only resolved at the public API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PlayerId {
    One = 0,
    Two = 1,
}

impl PlayerId {
    /// Both seats in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Returns the other player.
    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Returns the seat index (0 or 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::One => write!(f, "player 1"),
            PlayerId::Two => write!(f, "player 2"),
        }
    }
}

/// The name and piece color a caller registers for a seat.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PlayerIdentity {
    pub name: String,
    pub color: Color,
}

impl PlayerIdentity {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        PlayerIdentity {
            name: name.into(),
            color,
        }
    }
}

impl<S: Into<String>> From<(S, Color)> for PlayerIdentity {
    fn from((name, color): (S, Color)) -> Self {
        PlayerIdentity::new(name, color)
    }
}

/// A player's identity plus the pieces they have taken off the board.
///
/// Captured pieces are the opponent's color and count toward the capture
/// win. Reserve pieces are the player's own color and can be played back
/// onto the board. A displaced piece lands in exactly one of the two pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    identity: PlayerIdentity,
    captured: Vec<Piece>,
    reserve: Vec<Piece>,
}

impl Player {
    /// Creates a player with empty pools.
    pub fn new(identity: PlayerIdentity) -> Self {
        Player {
            identity,
            captured: Vec::new(),
            reserve: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.identity.name
    }

    pub fn color(&self) -> Color {
        self.identity.color
    }

    /// Number of opponent pieces this player has captured.
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }

    /// Number of own pieces waiting in reserve.
    pub fn reserve_count(&self) -> usize {
        self.reserve.len()
    }

    pub fn add_captured(&mut self, piece: Piece) {
        self.captured.push(piece);
    }

    pub fn add_reserve(&mut self, piece: Piece) {
        self.reserve.push(piece);
    }

    /// Removes the most recently reserved piece.
    pub fn take_from_reserve(&mut self) -> Result<Piece, GameError> {
        self.reserve.pop().ok_or(GameError::EmptyReserve)
    }

    /// Total pieces held off the board.
    #[cfg(test)]
    pub(crate) fn pieces_held(&self) -> usize {
        self.captured.len() + self.reserve.len()
    }

    /// Pieces of `color` held in either pool.
    #[cfg(test)]
    pub(crate) fn count_color(&self, color: Color) -> usize {
        self.captured
            .iter()
            .chain(&self.reserve)
            .filter(|p| p.is(color))
            .count()
    }
}

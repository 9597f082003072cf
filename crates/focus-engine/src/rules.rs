//! Game rules: where displaced pieces go and when the game ends.
//!
//! These are pure functions over board and player state. The
//! [`Game`](crate::Game) engine calls them after every accepted move.

use crate::{Board, Player, PlayerId};
use focus_core::{Color, CAPTURES_TO_WIN};

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Player 1 wins.
    PlayerOneWins(WinReason),
    /// Player 2 wins.
    PlayerTwoWins(WinReason),
}

impl GameResult {
    /// Builds the result for a win by `winner`.
    pub const fn win(winner: PlayerId, reason: WinReason) -> Self {
        match winner {
            PlayerId::One => GameResult::PlayerOneWins(reason),
            PlayerId::Two => GameResult::PlayerTwoWins(reason),
        }
    }

    pub const fn winner(self) -> PlayerId {
        match self {
            GameResult::PlayerOneWins(_) => PlayerId::One,
            GameResult::PlayerTwoWins(_) => PlayerId::Two,
        }
    }

    pub const fn reason(self) -> WinReason {
        match self {
            GameResult::PlayerOneWins(reason) | GameResult::PlayerTwoWins(reason) => reason,
        }
    }
}

/// How a game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The mover has captured at least [`CAPTURES_TO_WIN`] pieces.
    Capture,
    /// Every occupied square is topped by the same color.
    Domination,
}

/// Where a piece pushed out of an overfull stack ends up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowDestination {
    /// Back to the mover's reserve.
    Reserve,
    /// Into the mover's captured pool.
    Captured,
}

/// Routes a displaced piece: the mover keeps their own color in reserve and
/// captures anything else, no matter who placed it.
#[inline]
pub fn route_overflow(piece: Color, mover: Color) -> OverflowDestination {
    if piece == mover {
        OverflowDestination::Reserve
    } else {
        OverflowDestination::Captured
    }
}

/// Checks the win conditions after `mover` has moved.
///
/// Capture is checked first. Domination is decided from the board alone: it
/// holds whenever all stack tops share one color.
pub fn evaluate_win(board: &Board, mover: &Player) -> Option<WinReason> {
    if mover.captured_count() >= CAPTURES_TO_WIN {
        Some(WinReason::Capture)
    } else if board.dominant_color().is_some() {
        Some(WinReason::Domination)
    } else {
        None
    }
}

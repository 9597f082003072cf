//! Rules engine for Focus, a two-player stacking game on a 6x6 board.
//!
//! This crate provides:
//! - [`Game`] - the engine: move validation, move application, and win detection
//! - [`Board`] - the grid of piece stacks
//! - [`Player`] - each player's identity, captured pieces, and reserve
//! - [`rules`] - overflow routing and win conditions
//! - [`GameSetup`] - player identities loaded from TOML
//!
//! # Rules in brief
//!
//! A player moves the top `n` pieces of a stack they control exactly `n`
//! squares along a row or column, landing on top of whatever is there. A stack
//! taller than five loses pieces from the bottom: the mover keeps their own
//! color in reserve and captures the rest. Reserve pieces can be dropped on
//! any square instead of moving. Six captures, or every stack topped by one
//! color, wins.
//!
//! # Example
//!
//! ```
//! use focus_core::Color;
//! use focus_engine::{Game, MoveOutcome, PlayerId};
//!
//! let mut game = Game::new(("Ada", Color::Red), ("Bo", Color::Green)).unwrap();
//! let outcome = game.submit_move("Ada", (0, 0), (0, 1), 1).unwrap();
//! assert_eq!(outcome, MoveOutcome::Moved);
//! assert_eq!(game.pieces_at((0, 1)).unwrap().len(), 2);
//! assert_eq!(game.turn(), PlayerId::Two);
//! ```

mod board;
mod game;
pub mod movegen;
mod player;
pub mod rules;
mod setup;

pub use board::Board;
pub use game::{Game, GameError, GameMove, MoveOutcome};
pub use movegen::generate_moves;
pub use player::{Player, PlayerId, PlayerIdentity};
pub use rules::{GameResult, OverflowDestination, WinReason};
pub use setup::{GameSetup, SetupError};

//! Loading player identities from a TOML game setup.
//!
//! ```toml
//! [player_one]
//! name = "Ada"
//! color = "red"
//!
//! [player_two]
//! name = "Bo"
//! color = "green"
//! ```

use crate::{Game, GameError, PlayerIdentity};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a game setup.
#[derive(Error, Debug)]
pub enum SetupError {
    /// Failed to read the setup file from disk.
    #[error("failed to read setup file: {0}")]
    Read(#[from] std::io::Error),
    /// The file is not a valid setup.
    #[error("failed to parse setup: {0}")]
    Parse(#[from] toml::de::Error),
    /// The identities cannot share a game.
    #[error(transparent)]
    Identity(#[from] GameError),
}

/// The two seats of a game, in turn order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameSetup {
    pub player_one: PlayerIdentity,
    pub player_two: PlayerIdentity,
}

impl GameSetup {
    /// Parses a setup from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SetupError> {
        Ok(toml::from_str(content)?)
    }

    /// Reads and parses a setup file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Starts a new game with these players.
    pub fn new_game(&self) -> Result<Game, SetupError> {
        Ok(Game::new(self.player_one.clone(), self.player_two.clone())?)
    }
}

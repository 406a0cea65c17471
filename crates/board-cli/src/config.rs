//! Board setup configuration loaded from TOML.
//!
//! ```toml
//! start_position = true
//!
//! [[placements]]
//! square = "e4"
//! piece = 1
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A single piece to place after the board is set up.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Square label, e.g. "e4".
    pub square: String,
    /// Signed piece code. Not validated.
    pub piece: i32,
}

/// How the board is populated before printing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Place the standard starting position first. Defaults to true.
    #[serde(default = "default_start_position")]
    pub start_position: bool,
    /// Extra placements applied in order after the starting position.
    #[serde(default)]
    pub placements: Vec<Placement>,
}

fn default_start_position() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            start_position: default_start_position(),
            placements: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Loads the configuration at `path`, or the defaults if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ReadError`] if the file exists but cannot be read,
    /// or [`ConfigError::ParseError`] if the file contains invalid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Default configuration path: `board.toml` in the working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from("board.toml")
    }
}

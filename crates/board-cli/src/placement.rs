//! `SQUARE=CODE` placement arguments.

use board_core::{label_to_index, BoardError};
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a placement argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlacementError {
    #[error("expected SQUARE=CODE, got '{0}'")]
    MissingSeparator(String),

    #[error("invalid piece code: '{0}'")]
    InvalidCode(String),

    #[error(transparent)]
    Square(#[from] BoardError),
}

/// A piece code destined for one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementArg {
    pub index: i32,
    pub piece: i32,
}

impl PlacementArg {
    /// Resolves a square label and code into a placement.
    pub fn new(square: &str, piece: i32) -> Result<Self, PlacementError> {
        Ok(PlacementArg {
            index: label_to_index(square.trim())?,
            piece,
        })
    }
}

impl FromStr for PlacementArg {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (square, code) = s
            .split_once('=')
            .ok_or_else(|| PlacementError::MissingSeparator(s.to_string()))?;
        let piece = code
            .trim()
            .parse::<i32>()
            .map_err(|_| PlacementError::InvalidCode(code.to_string()))?;
        Self::new(square, piece)
    }
}

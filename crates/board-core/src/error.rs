//! Board access errors.

use thiserror::Error;

/// Errors raised by board coordinate conversions and cell access.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    #[error("coordinates out of range: file {file}, rank {rank} (expected 0-7)")]
    CoordsOutOfRange { file: i32, rank: i32 },

    #[error("index out of range: {0} (expected 0-127)")]
    IndexOutOfRange(i32),

    #[error("{table} symbol out of range: position {position} (expected 0-7)")]
    SymbolOutOfRange { table: &'static str, position: i32 },

    #[error("invalid square label: '{0}'")]
    InvalidLabel(String),
}

impl BoardError {
    /// Returns true for the bounds-violation variants.
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            BoardError::CoordsOutOfRange { .. }
                | BoardError::IndexOutOfRange(_)
                | BoardError::SymbolOutOfRange { .. }
        )
    }
}

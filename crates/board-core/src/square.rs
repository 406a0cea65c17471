//! 0x88 coordinate mapping.
//!
//! The board is a flat array of 128 cells laid out as eight rows of sixteen.
//! The low nibble of an index is the file, the high nibble is the rank, and
//! only files 0-7 of each row are real squares:
//!
//! ```text
//! index = rank * 16 + file      file = index & 0x0F      rank = index >> 4
//! ```
//!
//! An index is on the board exactly when `index & 0x88 == 0`.

use crate::BoardError;

/// File symbols, indexed by file (0-7).
pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Rank symbols, indexed by rank (0-7).
pub const RANKS: [char; 8] = ['1', '2', '3', '4', '5', '6', '7', '8'];

/// Number of cells in the flat array.
pub const CELL_COUNT: usize = 128;

/// Converts a file and rank (each 0-7) to a flat index.
pub const fn coords_to_index(file: i32, rank: i32) -> Result<i32, BoardError> {
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        return Err(BoardError::CoordsOutOfRange { file, rank });
    }
    Ok((rank << 4) | file)
}

/// Converts a flat index (0-127) to its two-character label, e.g. "e4".
///
/// Only the flat range is checked here. An off-board index such as 8 passes
/// that check and then fails the file symbol lookup with
/// [`BoardError::SymbolOutOfRange`].
pub fn index_to_coords(index: i32) -> Result<String, BoardError> {
    check_index(index)?;
    let file = symbol(&FILES, "file", index & 0x0F)?;
    let rank = symbol(&RANKS, "rank", index >> 4)?;
    Ok(format!("{}{}", file, rank))
}

/// Parses a label such as "e4" into its flat index.
pub fn label_to_index(label: &str) -> Result<i32, BoardError> {
    let invalid = || BoardError::InvalidLabel(label.to_string());
    let mut chars = label.chars();
    let (Some(f), Some(r), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let file = FILES
        .iter()
        .position(|&c| c == f.to_ascii_lowercase())
        .ok_or_else(invalid)?;
    let rank = RANKS.iter().position(|&c| c == r).ok_or_else(invalid)?;
    coords_to_index(file as i32, rank as i32)
}

/// Returns true if the index is in the flat range and names a real square.
#[inline]
pub const fn is_on_board(index: i32) -> bool {
    index >= 0 && index < CELL_COUNT as i32 && index & 0x88 == 0
}

/// Fails unless the index lies in [0, 127].
#[inline]
pub(crate) const fn check_index(index: i32) -> Result<usize, BoardError> {
    if index < 0 || index >= CELL_COUNT as i32 {
        return Err(BoardError::IndexOutOfRange(index));
    }
    Ok(index as usize)
}

fn symbol(table: &[char; 8], name: &'static str, position: i32) -> Result<char, BoardError> {
    usize::try_from(position)
        .ok()
        .and_then(|i| table.get(i).copied())
        .ok_or(BoardError::SymbolOutOfRange {
            table: name,
            position,
        })
}

//! 0x88 chessboard state container.
//!
//! This crate provides:
//! - [`Board`] - 128 signed piece codes with bounds-checked access and a text renderer
//! - [`Piece`] and [`Color`] with the signed piece-code scheme (`kind * color`)
//! - Coordinate conversion between file/rank, flat index, and labels like "e4"
//! - [`BoardError`] for every out-of-range access
//!
//! # Layout
//!
//! Each rank occupies sixteen cells, of which the first eight are squares.
//! `index = rank * 16 + file`, so `index & 0x88 != 0` flags any index that
//! has stepped off the board.
//!
//! # Example
//!
//! ```
//! use board_core::{Board, Color, Piece};
//!
//! let mut board = Board::new();
//! board.set_start_position_pieces();
//! assert_eq!(board.get_piece_at(4, 0), Ok(Piece::King.code(Color::White)));
//!
//! let e4 = board.coords_to_index(4, 3).unwrap();
//! board.set_piece(e4, Piece::Pawn.code(Color::White)).unwrap();
//! assert_eq!(board.index_to_coords(e4).unwrap(), "e4");
//! ```

mod board;
mod color;
mod error;
mod piece;
pub mod square;

pub use board::Board;
pub use color::{Color, BLACK, WHITE};
pub use error::BoardError;
pub use piece::{decode, Piece, BISHOP, EMPTY, KING, KNIGHT, PAWN, QUEEN, ROOK};
pub use square::{coords_to_index, index_to_coords, is_on_board, label_to_index, FILES, RANKS};

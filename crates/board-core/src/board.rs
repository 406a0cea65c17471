//! The 0x88 board state container.

use std::fmt;

use crate::square::{self, check_index, is_on_board, CELL_COUNT, FILES, RANKS};
use crate::{decode, BoardError, Color, Piece, EMPTY};

/// A chessboard stored as 128 signed piece codes in 0x88 layout.
///
/// Cells start empty (code 0). Only [`Board::set_piece`] and
/// [`Board::set_start_position_pieces`] mutate the board. Piece codes are not
/// validated; any `i32` may be stored and read back unchanged.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [i32; CELL_COUNT],
}

impl Board {
    /// Number of cells in the flat array.
    pub const SIZE: usize = CELL_COUNT;

    /// Back-rank piece kinds, indexed by file.
    pub const BACK_RANK: [Piece; 8] = [
        Piece::Rook,
        Piece::Knight,
        Piece::Bishop,
        Piece::Queen,
        Piece::King,
        Piece::Bishop,
        Piece::Knight,
        Piece::Rook,
    ];

    /// Creates an empty board.
    pub const fn new() -> Self {
        Board {
            cells: [EMPTY; CELL_COUNT],
        }
    }

    /// See [`square::coords_to_index`].
    #[inline]
    pub const fn coords_to_index(&self, file: i32, rank: i32) -> Result<i32, BoardError> {
        square::coords_to_index(file, rank)
    }

    /// See [`square::index_to_coords`].
    #[inline]
    pub fn index_to_coords(&self, index: i32) -> Result<String, BoardError> {
        square::index_to_coords(index)
    }

    /// Overwrites the cell at `index` with `piece`.
    pub fn set_piece(&mut self, index: i32, piece: i32) -> Result<(), BoardError> {
        let i = check_index(index)?;
        self.cells[i] = piece;
        Ok(())
    }

    /// Returns the piece code at the given file and rank.
    pub fn get_piece_at(&self, file: i32, rank: i32) -> Result<i32, BoardError> {
        let index = self.coords_to_index(file, rank)?;
        self.get_piece_at_index(index)
    }

    /// Returns the piece code stored at `index`.
    pub fn get_piece_at_index(&self, index: i32) -> Result<i32, BoardError> {
        let i = check_index(index)?;
        Ok(self.cells[i])
    }

    /// Places the 32 pieces of the standard starting position.
    ///
    /// Only ranks 1, 2, 7 and 8 are written; every other cell keeps its value.
    pub fn set_start_position_pieces(&mut self) {
        for (file, piece) in Self::BACK_RANK.into_iter().enumerate() {
            self.cells[cell(file, 0)] = piece.code(Color::White);
            self.cells[cell(file, 1)] = Piece::Pawn.code(Color::White);
            self.cells[cell(file, 6)] = Piece::Pawn.code(Color::Black);
            self.cells[cell(file, 7)] = piece.code(Color::Black);
        }
    }

    /// Resets every cell, including the off-board half of each row, to empty.
    pub fn clear(&mut self) {
        self.cells = [EMPTY; CELL_COUNT];
    }

    /// Iterates over occupied on-board squares as `(index, code)`, in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &code)| (i as i32, code))
            .filter(|&(i, code)| code != EMPTY && is_on_board(i))
    }

    /// Renders the board as text, rank 8 first, with a file-label footer.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Prints [`Board::render`] to stdout.
    pub fn display_board(&self) {
        print!("{}", self);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Flat index for a file and rank already known to be in 0-7.
#[inline]
const fn cell(file: usize, rank: usize) -> usize {
    (rank << 4) | file
}

fn square_char(code: i32) -> char {
    if code == EMPTY {
        return '.';
    }
    match decode(code) {
        Some((piece, color)) => piece.to_char(color),
        None => '?',
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..RANKS.len()).rev() {
            write!(f, "{}", RANKS[rank])?;
            for file in 0..FILES.len() {
                write!(f, " {}", square_char(self.cells[cell(file, rank)]))?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in FILES {
            write!(f, " {}", file)?;
        }
        writeln!(f)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("pieces", &self.pieces().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BISHOP, BLACK, KING, KNIGHT, PAWN, QUEEN, ROOK, WHITE};

    fn start() -> Board {
        let mut board = Board::new();
        board.set_start_position_pieces();
        board
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        for i in 0..Board::SIZE as i32 {
            assert_eq!(board.get_piece_at_index(i), Ok(0));
        }
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn start_position_pieces() {
        let board = start();
        assert_eq!(board.get_piece_at(0, 0), Ok(ROOK * WHITE));
        assert_eq!(board.get_piece_at(1, 0), Ok(KNIGHT * WHITE));
        assert_eq!(board.get_piece_at(2, 0), Ok(BISHOP * WHITE));
        assert_eq!(board.get_piece_at(3, 0), Ok(QUEEN * WHITE));
        assert_eq!(board.get_piece_at(4, 0), Ok(KING * WHITE));
        assert_eq!(board.get_piece_at(4, 7), Ok(KING * BLACK));
        assert_eq!(board.get_piece_at(3, 7), Ok(QUEEN * BLACK));
        assert_eq!(board.get_piece_at(0, 1), Ok(PAWN * WHITE));
        assert_eq!(board.get_piece_at(0, 6), Ok(PAWN * BLACK));
        assert_eq!(board.get_piece_at(4, 0), Ok(6));
        assert_eq!(board.get_piece_at(4, 7), Ok(-6));
        for rank in 2..=5 {
            for file in 0..8 {
                assert_eq!(board.get_piece_at(file, rank), Ok(0));
            }
        }
        assert_eq!(board.pieces().count(), 32);
    }

    #[test]
    fn start_position_overwrites_only_its_squares() {
        let mut board = Board::new();
        board.set_piece(0, 99).unwrap();
        board.set_piece(52, -3).unwrap();
        board.set_piece(8, 7).unwrap();
        board.set_start_position_pieces();

        assert_eq!(board.get_piece_at_index(0), Ok(4));
        assert_eq!(board.get_piece_at_index(52), Ok(-3));
        assert_eq!(board.get_piece_at_index(8), Ok(7));

        let again = board.clone();
        board.set_start_position_pieces();
        assert_eq!(board, again);
    }

    #[test]
    fn set_piece_stores_any_code() {
        let mut board = Board::new();
        for (index, code) in [(0, 99), (52, -42), (119, i32::MIN), (127, 7)] {
            board.set_piece(index, code).unwrap();
            assert_eq!(board.get_piece_at_index(index), Ok(code));
        }
    }

    #[test]
    fn set_piece_rejects_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.set_piece(128, 1), Err(BoardError::IndexOutOfRange(128)));
        assert_eq!(board.set_piece(-1, 1), Err(BoardError::IndexOutOfRange(-1)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn get_piece_errors() {
        let board = Board::new();
        assert_eq!(
            board.get_piece_at(8, 0),
            Err(BoardError::CoordsOutOfRange { file: 8, rank: 0 })
        );
        assert_eq!(
            board.get_piece_at(0, -1),
            Err(BoardError::CoordsOutOfRange { file: 0, rank: -1 })
        );
        assert_eq!(
            board.get_piece_at_index(128),
            Err(BoardError::IndexOutOfRange(128))
        );
    }

    #[test]
    fn get_piece_at_index_reads_off_board_cells() {
        let mut board = Board::new();
        board.set_piece(8, 5).unwrap();
        assert_eq!(board.get_piece_at_index(8), Ok(5));
        assert_eq!(board.pieces().count(), 0);
    }

    #[test]
    fn render_start_position() {
        let expected = "\
8 r n b q k b n r
7 p p p p p p p p
6 . . . . . . . .
5 . . . . . . . .
4 . . . . . . . .
3 . . . . . . . .
2 P P P P P P P P
1 R N B Q K B N R
  a b c d e f g h
";
        assert_eq!(start().render(), expected);
    }

    #[test]
    fn render_lines() {
        let board = start();
        let text = board.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }

    #[test]
    fn render_marks_unknown_codes() {
        let mut board = Board::new();
        board.set_piece(0, 99).unwrap();
        board.set_piece(1, -5).unwrap();
        let text = board.render();
        assert_eq!(text.lines().nth(7), Some("1 ? q . . . . . ."));
    }

    #[test]
    fn render_does_not_mutate() {
        let board = start();
        let before = board.clone();
        let _ = board.render();
        board.display_board();
        assert_eq!(board, before);
    }

    #[test]
    fn clear_resets_everything() {
        let mut board = start();
        board.set_piece(15, 3).unwrap();
        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn pieces_in_index_order() {
        let mut board = Board::new();
        board.set_piece(52, 1).unwrap();
        board.set_piece(4, 6).unwrap();
        board.set_piece(116, -6).unwrap();
        let pieces: Vec<_> = board.pieces().collect();
        assert_eq!(pieces, vec![(4, 6), (52, 1), (116, -6)]);
    }

    #[test]
    fn method_conversions_delegate() {
        let board = Board::default();
        assert_eq!(board.coords_to_index(4, 3), Ok(52));
        assert_eq!(board.index_to_coords(52).as_deref(), Ok("e4"));
    }
}

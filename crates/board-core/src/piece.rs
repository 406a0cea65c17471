//! Piece kinds and signed piece codes.
//!
//! A piece code is `kind * color`: zero is an empty square, the magnitude
//! selects the kind and the sign selects the side.

use crate::Color;

/// Code of an empty square.
pub const EMPTY: i32 = 0;
pub const PAWN: i32 = 1;
pub const KNIGHT: i32 = 2;
pub const BISHOP: i32 = 3;
pub const ROOK: i32 = 4;
pub const QUEEN: i32 = 5;
pub const KING: i32 = 6;

/// The six kinds of chess pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
    King = 6,
}

impl Piece {
    /// All piece kinds in order.
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Returns the kind value (1-6).
    #[inline]
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Creates a kind from its value (1-6).
    #[inline]
    pub const fn from_value(value: i32) -> Option<Self> {
        match value {
            PAWN => Some(Piece::Pawn),
            KNIGHT => Some(Piece::Knight),
            BISHOP => Some(Piece::Bishop),
            ROOK => Some(Piece::Rook),
            QUEEN => Some(Piece::Queen),
            KING => Some(Piece::King),
            _ => None,
        }
    }

    /// Returns the piece code for this kind on the given side.
    #[inline]
    pub const fn code(self, color: Color) -> i32 {
        self.value() * color.sign()
    }

    /// Returns the letter for this piece, uppercase for White.
    pub const fn to_char(self, color: Color) -> char {
        let c = match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        };
        match color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    /// Parses a piece letter into a kind and side.
    pub const fn from_char(c: char) -> Option<(Piece, Color)> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'r' => Piece::Rook,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        Some((piece, color))
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Piece::Pawn => "Pawn",
            Piece::Knight => "Knight",
            Piece::Bishop => "Bishop",
            Piece::Rook => "Rook",
            Piece::Queen => "Queen",
            Piece::King => "King",
        };
        write!(f, "{}", name)
    }
}

/// Splits a piece code into kind and side.
///
/// Returns `None` for the empty code and for any code whose magnitude is not
/// one of the six kinds.
pub const fn decode(code: i32) -> Option<(Piece, Color)> {
    let color = match Color::of_code(code) {
        Some(c) => c,
        None => return None,
    };
    match Piece::from_value(code.saturating_abs()) {
        Some(piece) => Some((piece, color)),
        None => None,
    }
}

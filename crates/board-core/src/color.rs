//! Side representation.
//!
//! A color is the sign of a piece code: positive codes are White, negative
//! codes are Black.

/// Sign multiplier for White piece codes.
pub const WHITE: i32 = 1;
/// Sign multiplier for Black piece codes.
pub const BLACK: i32 = -1;

/// The two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Color {
    White = 1,
    Black = -1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the sign applied to piece codes (+1 for White, -1 for Black).
    #[inline]
    pub const fn sign(self) -> i32 {
        self as i8 as i32
    }

    /// Returns the color owning a nonzero piece code.
    #[inline]
    pub const fn of_code(code: i32) -> Option<Self> {
        if code > 0 {
            Some(Color::White)
        } else if code < 0 {
            Some(Color::Black)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

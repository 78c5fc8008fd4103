//! Primitive chess value types shared by every subsystem.
//!
//! Squares are `(rank, file)` pairs with rank 0 being White's home rank and
//! file 0 the a-file; the linear index used by the board array is
//! `rank * 8 + file`.

use std::fmt;
use std::ops::Sub;

use crate::board::vector::Vector;

/// Side to move / piece owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank holding this side's king and rooks at the start of the game.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Farthest rank from this side; pawns arriving here promote.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Rank step of a forward pawn move.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter.
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{name}")
    }
}

/// A piece standing on the board.
///
/// `has_moved` becomes true the first time the piece is relocated (plain
/// move, capture or castling) and is never reset; castling eligibility reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            has_moved: false,
        }
    }

    /// FEN letter: uppercase for White, lowercase for Black.
    pub fn fen_letter(&self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

/// Board coordinate. May hold off-board values so that untrusted input can be
/// represented and rejected with a precise diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub rank: i8,
    pub file: i8,
}

impl Square {
    #[inline]
    pub const fn new(rank: i8, file: i8) -> Self {
        Self { rank, file }
    }

    /// Inverse of `index`; `index` must be in `0..64`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            rank: (index / 8) as i8,
            file: (index % 8) as i8,
        }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.rank >= 0 && self.rank < 8 && self.file >= 0 && self.file < 8
    }

    /// Linear index into the board array. Only meaningful for on-board squares.
    #[inline]
    pub const fn index(self) -> usize {
        (self.rank as usize) * 8 + (self.file as usize)
    }

    /// Square displaced by `delta`, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, delta: Vector) -> Option<Square> {
        let next = Square::new(self.rank + delta.rank, self.file + delta.file);
        next.is_on_board().then_some(next)
    }

    /// Every square in row-major order from a1 (0, 0) to h8 (7, 7).
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl Sub for Square {
    type Output = Vector;

    /// Saturates so that off-board squares cannot overflow.
    fn sub(self, rhs: Square) -> Vector {
        Vector::new(
            self.rank.saturating_sub(rhs.rank),
            self.file.saturating_sub(rhs.file),
        )
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + self.file as u8);
            let rank = char::from(b'1' + self.rank as u8);
            write!(f, "{file}{rank}")
        } else {
            write!(f, "({}, {})", self.rank, self.file)
        }
    }
}

//! Canonical chess-rule constants.
//!
//! Starting layout, movement offsets and castling geometry. Offset tables are
//! ordered; move generation walks them in this order, which fixes the
//! tie-breaking order of the search.

use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::vector::Vector;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Piece kinds on the home rank, file a to file h.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KNIGHT_OFFSETS: [Vector; 8] = [
    Vector::new(2, 1),
    Vector::new(1, 2),
    Vector::new(-1, 2),
    Vector::new(-2, 1),
    Vector::new(-2, -1),
    Vector::new(-1, -2),
    Vector::new(1, -2),
    Vector::new(2, -1),
];

pub const KING_OFFSETS: [Vector; 8] = [
    Vector::new(1, 0),
    Vector::new(1, 1),
    Vector::new(0, 1),
    Vector::new(-1, 1),
    Vector::new(-1, 0),
    Vector::new(-1, -1),
    Vector::new(0, -1),
    Vector::new(1, -1),
];

pub const DIAGONAL_DIRECTIONS: [Vector; 4] = [
    Vector::new(1, 1),
    Vector::new(1, -1),
    Vector::new(-1, 1),
    Vector::new(-1, -1),
];

pub const ORTHOGONAL_DIRECTIONS: [Vector; 4] = [
    Vector::new(1, 0),
    Vector::new(-1, 0),
    Vector::new(0, 1),
    Vector::new(0, -1),
];

/// Queen rays: orthogonals first, then diagonals.
pub const QUEEN_DIRECTIONS: [Vector; 8] = [
    Vector::new(1, 0),
    Vector::new(-1, 0),
    Vector::new(0, 1),
    Vector::new(0, -1),
    Vector::new(1, 1),
    Vector::new(1, -1),
    Vector::new(-1, 1),
    Vector::new(-1, -1),
];

/// File deltas of the two pawn capture diagonals, a-side first.
pub const PAWN_CAPTURE_FILES: [i8; 2] = [-1, 1];

pub const KING_HOME_FILE: i8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Queen side: king e → c, rook a → d.
    Long,
    /// King side: king e → g, rook h → f.
    Short,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::Long, CastleSide::Short];

    #[inline]
    pub const fn king_to_file(self) -> i8 {
        match self {
            CastleSide::Long => 2,
            CastleSide::Short => 6,
        }
    }

    #[inline]
    pub const fn rook_from_file(self) -> i8 {
        match self {
            CastleSide::Long => 0,
            CastleSide::Short => 7,
        }
    }

    #[inline]
    pub const fn rook_to_file(self) -> i8 {
        match self {
            CastleSide::Long => 3,
            CastleSide::Short => 5,
        }
    }

    /// Files strictly between the king and the participating rook.
    pub fn files_between(self) -> std::ops::Range<i8> {
        match self {
            CastleSide::Long => 1..KING_HOME_FILE,
            CastleSide::Short => KING_HOME_FILE + 1..7,
        }
    }

    /// Square the king crosses on its way (the rook's destination).
    #[inline]
    pub const fn king_transit_square(self, color: Color) -> Square {
        Square::new(color.home_rank(), self.rook_to_file())
    }

    #[inline]
    pub const fn king_destination(self, color: Color) -> Square {
        Square::new(color.home_rank(), self.king_to_file())
    }

    #[inline]
    pub const fn rook_origin(self, color: Color) -> Square {
        Square::new(color.home_rank(), self.rook_from_file())
    }

    #[inline]
    pub const fn rook_destination(self, color: Color) -> Square {
        Square::new(color.home_rank(), self.rook_to_file())
    }
}

#[inline]
pub const fn king_home_square(color: Color) -> Square {
    Square::new(color.home_rank(), KING_HOME_FILE)
}

//! Move value type and shape-based move classification.
//!
//! A move is only a `(from, to)` pair. Castling and promotion are recognised
//! from the moving piece and the shape of the move rather than carried as
//! flags: castling is a king leaving its home square two files sideways, a
//! promotion is a pawn arriving on its farthest rank.

use std::fmt;

use crate::board::chess_rules::{king_home_square, CastleSide};
use crate::board::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChessMove {
    pub from: Square,
    pub to: Square,
}

impl ChessMove {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    /// Four-character coordinate form, e.g. `b8c6`.
    pub fn to_long_algebraic(&self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Castling side if `piece` moving `from -> to` has the castling shape.
pub fn castle_side(piece: &Piece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || from != king_home_square(piece.color) {
        return None;
    }
    CastleSide::BOTH
        .into_iter()
        .find(|side| to == side.king_destination(piece.color))
}

/// True when `piece` arriving on `to` must be promoted.
#[inline]
pub fn is_promotion(piece: &Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.rank == piece.color.promotion_rank()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::Color;

    #[test]
    fn castling_is_detected_by_shape() {
        let white_king = Piece::new(PieceKind::King, Color::White);
        let black_king = Piece::new(PieceKind::King, Color::Black);
        let e1 = Square::new(0, 4);
        assert_eq!(castle_side(&white_king, e1, Square::new(0, 6)), Some(CastleSide::Short));
        assert_eq!(castle_side(&white_king, e1, Square::new(0, 2)), Some(CastleSide::Long));
        assert_eq!(castle_side(&white_king, e1, Square::new(0, 5)), None);
        assert_eq!(castle_side(&black_king, e1, Square::new(0, 6)), None);

        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert_eq!(castle_side(&rook, e1, Square::new(0, 6)), None);
    }

    #[test]
    fn promotion_is_detected_by_shape() {
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(is_promotion(&white_pawn, Square::new(7, 0)));
        assert!(!is_promotion(&white_pawn, Square::new(0, 0)));
        assert!(is_promotion(&black_pawn, Square::new(0, 3)));
        assert!(!is_promotion(&Piece::new(PieceKind::Queen, Color::White), Square::new(7, 0)));
    }

    #[test]
    fn long_algebraic_output() {
        let mv = ChessMove::new(Square::new(7, 1), Square::new(5, 2));
        assert_eq!(mv.to_long_algebraic(), "b8c6");
        assert_eq!(mv.to_string(), "b8c6");
    }
}

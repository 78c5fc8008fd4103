//! Per-kind movement geometry.
//!
//! `Piece::path` answers two questions at once: can this kind travel the
//! delta `to - from` at all, and which squares does it cross on the way.
//! Occupancy is not consulted here; `Board` checks the returned squares.

use crate::board::chess_types::{Piece, PieceKind, Square};
use crate::board::vector::Vector;
use crate::chess_errors::ChessErrors;

impl Piece {
    /// Intermediate squares between `from` and `to` in travel order, `to`
    /// excluded.
    ///
    /// Knights and kings never pass over squares and return an empty path.
    /// Pawn diagonals are returned as empty paths too; whether they are legal
    /// depends on an enemy piece standing on `to`, which the board decides.
    ///
    /// Fails with `ChessErrors::IllegalGeometry` when either square is off the
    /// board or the delta does not match the movement pattern of the kind.
    pub fn path(&self, from: Square, to: Square) -> Result<Vec<Square>, ChessErrors> {
        let delta = to - from;
        let illegal = || ChessErrors::IllegalGeometry {
            kind: self.kind,
            delta,
        };
        if !from.is_on_board() || !to.is_on_board() || delta.is_zero() {
            return Err(illegal());
        }

        match self.kind {
            PieceKind::Pawn => {
                let forward = self.color.pawn_direction();
                if delta == Vector::new(forward, 0) {
                    Ok(vec![])
                } else if delta == Vector::new(2 * forward, 0) {
                    if from.rank != self.color.pawn_start_rank() {
                        return Err(illegal());
                    }
                    Ok(vec![Square::new(from.rank + forward, from.file)])
                } else if delta.rank == forward && delta.file.abs() == 1 {
                    Ok(vec![])
                } else {
                    Err(illegal())
                }
            }
            PieceKind::Knight => match delta.abs() {
                Vector { rank: 2, file: 1 } | Vector { rank: 1, file: 2 } => Ok(vec![]),
                _ => Err(illegal()),
            },
            PieceKind::King => {
                if delta.steps() == 1 {
                    Ok(vec![])
                } else {
                    Err(illegal())
                }
            }
            PieceKind::Bishop if delta.is_diagonal() => Ok(squares_between(from, to)),
            PieceKind::Rook if delta.is_orthogonal() => Ok(squares_between(from, to)),
            PieceKind::Queen if delta.is_diagonal() || delta.is_orthogonal() => {
                Ok(squares_between(from, to))
            }
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => Err(illegal()),
        }
    }
}

/// Squares strictly between two squares on a shared rank, file or diagonal.
fn squares_between(from: Square, to: Square) -> Vec<Square> {
    let step = (to - from).signum();
    let mut out = Vec::new();
    let mut current = Square::new(from.rank + step.rank, from.file + step.file);
    while current != to {
        out.push(current);
        current = Square::new(current.rank + step.rank, current.file + step.file);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::Color;

    fn sq(rank: i8, file: i8) -> Square {
        Square::new(rank, file)
    }

    #[test]
    fn slider_paths_in_travel_order() {
        let queen = Piece::new(PieceKind::Queen, Color::White);
        assert_eq!(queen.path(sq(0, 0), sq(0, 1)).expect("adjacent"), vec![]);
        assert_eq!(
            queen.path(sq(0, 0), sq(7, 0)).expect("file"),
            vec![sq(1, 0), sq(2, 0), sq(3, 0), sq(4, 0), sq(5, 0), sq(6, 0)]
        );
        assert_eq!(
            queen.path(sq(0, 0), sq(5, 5)).expect("diagonal"),
            vec![sq(1, 1), sq(2, 2), sq(3, 3), sq(4, 4)]
        );
        assert_eq!(
            queen.path(sq(5, 5), sq(0, 0)).expect("reverse diagonal"),
            vec![sq(4, 4), sq(3, 3), sq(2, 2), sq(1, 1)]
        );
    }

    #[test]
    fn bishop_and_rook_reject_foreign_lines() {
        let bishop = Piece::new(PieceKind::Bishop, Color::Black);
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        assert!(bishop.path(sq(2, 2), sq(2, 5)).is_err());
        assert_eq!(bishop.path(sq(2, 2), sq(0, 4)).expect("diagonal"), vec![sq(1, 3)]);
        assert!(rook.path(sq(2, 2), sq(4, 4)).is_err());
        assert_eq!(rook.path(sq(2, 2), sq(2, 0)).expect("rank"), vec![sq(2, 1)]);
        assert!(matches!(
            rook.path(sq(2, 2), sq(3, 4)),
            Err(ChessErrors::IllegalGeometry { kind: PieceKind::Rook, .. })
        ));
    }

    #[test]
    fn jumpers_have_empty_paths() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert_eq!(knight.path(sq(0, 1), sq(2, 2)).expect("knight jump"), vec![]);
        assert_eq!(knight.path(sq(4, 4), sq(3, 2)).expect("knight jump"), vec![]);
        assert!(knight.path(sq(0, 1), sq(2, 1)).is_err());

        let king = Piece::new(PieceKind::King, Color::White);
        assert_eq!(king.path(sq(0, 4), sq(1, 5)).expect("king step"), vec![]);
        assert!(king.path(sq(0, 4), sq(0, 6)).is_err());
        assert!(king.path(sq(0, 4), sq(0, 4)).is_err());
    }

    #[test]
    fn off_board_squares_are_rejected() {
        let rook = Piece::new(PieceKind::Rook, Color::White);
        assert!(matches!(
            rook.path(sq(100, 0), sq(-100, 0)),
            Err(ChessErrors::IllegalGeometry { kind: PieceKind::Rook, .. })
        ));
        assert!(rook.path(sq(0, 0), sq(8, 0)).is_err());
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        assert!(knight.path(sq(7, 7), sq(9, 8)).is_err());
    }

    #[test]
    fn pawn_geometry_depends_on_color_and_rank() {
        let white = Piece::new(PieceKind::Pawn, Color::White);
        let black = Piece::new(PieceKind::Pawn, Color::Black);

        assert_eq!(white.path(sq(1, 4), sq(3, 4)).expect("double step"), vec![sq(2, 4)]);
        assert!(white.path(sq(2, 4), sq(4, 4)).is_err());
        assert!(white.path(sq(1, 4), sq(0, 4)).is_err());
        assert_eq!(white.path(sq(1, 4), sq(2, 5)).expect("capture shape"), vec![]);

        assert_eq!(black.path(sq(6, 3), sq(4, 3)).expect("double step"), vec![sq(5, 3)]);
        assert_eq!(black.path(sq(5, 3), sq(4, 3)).expect("single step"), vec![]);
        assert!(black.path(sq(6, 3), sq(7, 3)).is_err());
        assert!(black.path(sq(6, 3), sq(5, 5)).is_err());
    }
}

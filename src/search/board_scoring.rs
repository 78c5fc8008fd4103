//! Static evaluation.
//!
//! Scores are absolute rather than relative to the side to move: positive
//! numbers favour Black, negative numbers favour White. The search maximizes
//! for Black and minimizes for White accordingly.

use crate::board::board::Board;
use crate::board::chess_types::{Color, PieceKind};

/// Side for which higher scores are better.
pub const MAXIMIZING_COLOR: Color = Color::Black;

pub trait BoardScorer: Send + Sync {
    /// Absolute score of the position; positive favours `MAXIMIZING_COLOR`.
    fn score(&self, board: &Board) -> i32;
}

/// Material plus piece-square bonuses.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialPositionScorer;

impl MaterialPositionScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 330,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 20000,
        }
    }

    fn balance_white_minus_black(board: &Board) -> i32 {
        let mut material = 0i32;
        let mut position = 0i32;
        for (square, piece) in board.all_figures() {
            let Some(piece) = piece else {
                continue;
            };
            let value = Self::piece_value(piece.kind);
            let bonus = piece.square_value(square);
            match piece.color {
                Color::White => {
                    material += value;
                    position += bonus;
                }
                Color::Black => {
                    material -= value;
                    position -= bonus;
                }
            }
        }
        material + position
    }
}

impl BoardScorer for MaterialPositionScorer {
    #[inline]
    fn score(&self, board: &Board) -> i32 {
        -Self::balance_white_minus_black(board)
    }
}

/// Default evaluation used by the search.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    MaterialPositionScorer.score(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_is_balanced() {
        assert_eq!(evaluate(&Board::new_game()), 0);
    }

    #[test]
    fn missing_white_queen_favours_black() {
        let board =
            Board::from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1").expect("fen");
        assert_eq!(evaluate(&board), 895);

        let mirrored =
            Board::from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").expect("fen");
        assert_eq!(evaluate(&mirrored), -895);
    }

    #[test]
    fn centralised_knight_scores_better() {
        let mut board = Board::new_game();
        board.apply_long_algebraic("b1c3").expect("b1c3");
        // a White improvement lowers the score
        assert_eq!(evaluate(&board), -50);

        board.apply_long_algebraic("b8c6").expect("b8c6");
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn piece_values() {
        assert_eq!(MaterialPositionScorer::piece_value(PieceKind::Knight), 330);
        assert_eq!(MaterialPositionScorer::piece_value(PieceKind::King), 20000);
    }
}

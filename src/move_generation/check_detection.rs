//! Targeted attack scans.
//!
//! Check detection starts from the king square and looks outward for the
//! pieces that could reach it: knights on their fixed offsets, the first piece
//! on each diagonal and orthogonal ray, enemy pawns on the two forward
//! diagonals and the enemy king on adjacent squares. No opponent move list is
//! built, which keeps the legal-move filter cheap.

use crate::board::board::Board;
use crate::board::chess_rules::{
    DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS, PAWN_CAPTURE_FILES,
};
use crate::board::chess_types::{Color, PieceKind, Square};
use crate::board::vector::Vector;

/// True when the king of `color` is attacked.
#[inline]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    is_square_attacked(board, board.king_square(color), color.opposite())
}

/// True when any piece of `attacker` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    let holds = |target: Option<Square>, kinds: &[PieceKind]| {
        target
            .and_then(|target| board.piece_at(target))
            .is_some_and(|piece| piece.color == attacker && kinds.contains(&piece.kind))
    };

    if KNIGHT_OFFSETS
        .iter()
        .any(|offset| holds(square.offset(*offset), &[PieceKind::Knight]))
    {
        return true;
    }

    let diagonal_sliders = [PieceKind::Bishop, PieceKind::Queen];
    if DIAGONAL_DIRECTIONS
        .iter()
        .any(|direction| holds(first_occupied(board, square, *direction), &diagonal_sliders))
    {
        return true;
    }

    let orthogonal_sliders = [PieceKind::Rook, PieceKind::Queen];
    if ORTHOGONAL_DIRECTIONS
        .iter()
        .any(|direction| holds(first_occupied(board, square, *direction), &orthogonal_sliders))
    {
        return true;
    }

    // Attacking pawns stand one rank behind the target from their own point of view.
    let pawn_rank = -attacker.pawn_direction();
    if PAWN_CAPTURE_FILES
        .iter()
        .any(|file| holds(square.offset(Vector::new(pawn_rank, *file)), &[PieceKind::Pawn]))
    {
        return true;
    }

    KING_OFFSETS
        .iter()
        .any(|offset| holds(square.offset(*offset), &[PieceKind::King]))
}

/// First occupied square walking from `origin` along `direction`.
fn first_occupied(board: &Board, origin: Square, direction: Vector) -> Option<Square> {
    let mut current = origin;
    while let Some(next) = current.offset(direction) {
        if board.piece_at(next).is_some() {
            return Some(next);
        }
        current = next;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::legal_move_generator::{generate_legal_moves, generate_pseudo_moves, LegalMoves};
    use rand::prelude::IndexedRandom;
    use rand::{rngs::StdRng, SeedableRng};

    fn board(fen: &str) -> Board {
        Board::from_fen(fen).expect("test FEN should parse")
    }

    #[test]
    fn no_check_in_opening_position() {
        let game = Board::new_game();
        assert!(!is_in_check(&game, Color::White));
        assert!(!is_in_check(&game, Color::Black));
    }

    #[test]
    fn knight_and_pawn_checks() {
        let knight = board("4k3/8/3N4/8/8/8/8/4K3 b - - 0 1");
        assert!(is_in_check(&knight, Color::Black));

        // Black pawn on d2 attacks e1; a White pawn on d2 would not.
        let black_pawn = board("4k3/8/8/8/8/8/3p4/4K3 w - - 0 1");
        assert!(is_in_check(&black_pawn, Color::White));
        let white_pawn = board("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1");
        assert!(!is_in_check(&white_pawn, Color::White));

        // Pawns attack forward only.
        let behind = board("4k3/8/8/8/8/4K3/3p4/8 w - - 0 1");
        assert!(!is_in_check(&behind, Color::White));
    }

    #[test]
    fn slider_checks_stop_at_first_piece() {
        let rook = board("4k3/8/8/8/8/8/8/r3K3 w - - 0 1");
        assert!(is_in_check(&rook, Color::White));

        let blocked = board("4k3/8/8/8/8/8/8/r1N1K3 w - - 0 1");
        assert!(!is_in_check(&blocked, Color::White));

        let bishop = board("4k3/8/8/b7/8/8/8/4K3 w - - 0 1");
        assert!(is_in_check(&bishop, Color::White));

        // A rook on a diagonal does not check.
        let rook_on_diagonal = board("4k3/8/8/r7/8/8/8/4K3 w - - 0 1");
        assert!(!is_in_check(&rook_on_diagonal, Color::White));

        let queen = board("4k3/8/8/8/8/8/8/4K2q w - - 0 1");
        assert!(is_in_check(&queen, Color::White));
    }

    #[test]
    fn adjacent_king_attacks_square() {
        let game = board("8/8/8/3k4/8/3K4/8/8 w - - 0 1");
        assert!(is_square_attacked(&game, Square::new(3, 3), Color::White));
        assert!(is_square_attacked(&game, Square::new(3, 3), Color::Black));
        assert!(!is_square_attacked(&game, Square::new(0, 0), Color::Black));
    }

    #[test]
    fn matches_brute_force_on_random_playouts() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..40 {
            let mut game = Board::new_game();
            for _ in 0..60 {
                for color in [Color::White, Color::Black] {
                    let king = game.king_square(color);
                    let brute_force = generate_pseudo_moves(&game, color.opposite())
                        .iter()
                        .any(|mv| mv.to == king);
                    assert_eq!(is_in_check(&game, color), brute_force, "{}", game.to_fen());
                }

                let LegalMoves::Moves(moves) = generate_legal_moves(&game, game.side_to_move())
                    .expect("move generation should succeed")
                else {
                    break;
                };
                let mv = *moves.choose(&mut rng).expect("non-empty move list");
                game.apply_move(mv).expect("legal move should apply");
            }
        }
    }
}

//! Candidate destination groups per piece.
//!
//! A move group is an ordered run of destinations. Jumpers produce one
//! single-square group per reachable offset; sliders produce one run per
//! direction that ends on the first occupied square (included, whatever its
//! color); pawns produce a forward-advance group and a diagonal group. The
//! consumer decides which squares are actual moves.

use crate::board::board::Board;
use crate::board::chess_rules::{
    DIAGONAL_DIRECTIONS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_DIRECTIONS,
    PAWN_CAPTURE_FILES, QUEEN_DIRECTIONS,
};
use crate::board::chess_types::{Piece, PieceKind, Square};
use crate::board::vector::Vector;

pub type MoveGroup = Vec<Square>;

impl Piece {
    /// Destination groups for this piece standing on `position`.
    ///
    /// The pawn forward group offers the two-square advance from the start
    /// rank without looking at occupancy; callers stop at the first occupied
    /// square of that group.
    pub fn all_moves(&self, position: Square, board: &Board) -> Vec<MoveGroup> {
        match self.kind {
            PieceKind::Pawn => pawn_groups(self, position),
            PieceKind::Knight => jumper_groups(position, &KNIGHT_OFFSETS),
            PieceKind::King => jumper_groups(position, &KING_OFFSETS),
            PieceKind::Bishop => slider_groups(position, &DIAGONAL_DIRECTIONS, board),
            PieceKind::Rook => slider_groups(position, &ORTHOGONAL_DIRECTIONS, board),
            PieceKind::Queen => slider_groups(position, &QUEEN_DIRECTIONS, board),
        }
    }
}

fn jumper_groups(position: Square, offsets: &[Vector]) -> Vec<MoveGroup> {
    offsets
        .iter()
        .filter_map(|offset| position.offset(*offset))
        .map(|target| vec![target])
        .collect()
}

fn slider_groups(position: Square, directions: &[Vector], board: &Board) -> Vec<MoveGroup> {
    let mut groups = Vec::with_capacity(directions.len());
    for direction in directions {
        let mut run = MoveGroup::new();
        let mut current = position;
        while let Some(next) = current.offset(*direction) {
            run.push(next);
            if board.piece_at(next).is_some() {
                break;
            }
            current = next;
        }
        if !run.is_empty() {
            groups.push(run);
        }
    }
    groups
}

fn pawn_groups(pawn: &Piece, position: Square) -> Vec<MoveGroup> {
    let forward = pawn.color.pawn_direction();
    let mut groups = Vec::with_capacity(2);

    let mut advance = MoveGroup::new();
    if let Some(one) = position.offset(Vector::new(forward, 0)) {
        advance.push(one);
        if position.rank == pawn.color.pawn_start_rank() {
            if let Some(two) = position.offset(Vector::new(2 * forward, 0)) {
                advance.push(two);
            }
        }
    }
    if !advance.is_empty() {
        groups.push(advance);
    }

    let diagonals: MoveGroup = PAWN_CAPTURE_FILES
        .iter()
        .filter_map(|file_step| position.offset(Vector::new(forward, *file_step)))
        .collect();
    if !diagonals.is_empty() {
        groups.push(diagonals);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_types::Color;

    fn sq(rank: i8, file: i8) -> Square {
        Square::new(rank, file)
    }

    #[test]
    fn knight_groups_are_edge_bounded() {
        let board = Board::new_game();
        let knight = Piece::new(PieceKind::Knight, Color::Black);
        let groups = knight.all_moves(sq(7, 1), &board);
        assert_eq!(groups, vec![vec![sq(6, 3)], vec![sq(5, 2)], vec![sq(5, 0)]]);
    }

    #[test]
    fn slider_runs_stop_on_first_occupied_square() {
        let board = Board::new_game();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        // Rook dropped on d4 of the opening position: north run ends on d7.
        let groups = rook.all_moves(sq(3, 3), &board);
        assert_eq!(groups[0], vec![sq(4, 3), sq(5, 3), sq(6, 3)]);
        assert_eq!(groups[1], vec![sq(2, 3), sq(1, 3)]);
        assert_eq!(groups[2], vec![sq(3, 4), sq(3, 5), sq(3, 6), sq(3, 7)]);
        assert_eq!(groups[3], vec![sq(3, 2), sq(3, 1), sq(3, 0)]);

        let corner_rook = rook.all_moves(sq(0, 0), &board);
        assert_eq!(corner_rook, vec![vec![sq(1, 0)], vec![sq(0, 1)]]);
    }

    #[test]
    fn pawn_groups_clamp_diagonals_at_edges() {
        let board = Board::new_game();
        let white_pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(
            white_pawn.all_moves(sq(1, 0), &board),
            vec![vec![sq(2, 0), sq(3, 0)], vec![sq(2, 1)]]
        );
        assert_eq!(
            white_pawn.all_moves(sq(2, 4), &board),
            vec![vec![sq(3, 4)], vec![sq(3, 3), sq(3, 5)]]
        );

        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(
            black_pawn.all_moves(sq(6, 7), &board),
            vec![vec![sq(5, 7), sq(4, 7)], vec![sq(5, 6)]]
        );
    }
}

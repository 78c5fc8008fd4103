//! Move-path enumeration for validating the move generator.
//!
//! Leaf moves are classified by the board before they are applied (capture,
//! castle, promotion) and by the position after them (check, checkmate).
//! Promotions count once per move since generation only emits the queen
//! promotion.

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::move_generation::legal_move_generator::{generate_legal_moves, LegalMoves, TerminalState};
use crate::moves::move_description::{castle_side, is_promotion, ChessMove};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(board: &Board, depth: u8) -> Result<PerftCounts, ChessErrors> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let LegalMoves::Moves(moves) = generate_legal_moves(board, board.side_to_move())? else {
        return Ok(PerftCounts::default());
    };

    let mut total = PerftCounts::default();
    for mv in moves {
        let mut child = board.clone();
        if depth == 1 {
            let leaf = classify_leaf(&mut child, mv)?;
            total.merge(leaf);
        } else {
            child.apply_move(mv)?;
            total.merge(perft(&child, depth - 1)?);
        }
    }
    Ok(total)
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(board: &Board, depth: u8) -> Result<Vec<(ChessMove, usize)>, ChessErrors> {
    let moves = generate_legal_moves(board, board.side_to_move())?.into_moves()?;
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        let mut child = board.clone();
        child.apply_move(mv)?;
        let nodes = perft(&child, depth.saturating_sub(1))?.nodes;
        out.push((mv, nodes));
    }
    Ok(out)
}

fn classify_leaf(board: &mut Board, mv: ChessMove) -> Result<PerftCounts, ChessErrors> {
    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    if let Some(piece) = board.piece_at(mv.from) {
        if board.piece_at(mv.to).is_some() {
            counts.captures += 1;
        }
        if castle_side(&piece, mv.from, mv.to).is_some() {
            counts.castles += 1;
        }
        if is_promotion(&piece, mv.to) {
            counts.promotions += 1;
        }
    }

    board.apply_move(mv)?;
    let defender = board.side_to_move();
    if board.is_in_check(defender) {
        counts.checks += 1;
        if board.is_terminal()? == Some(TerminalState::CheckMate) {
            counts.checkmates += 1;
        }
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position_shallow_counts() {
        let game = Board::new_game();
        assert_eq!(perft(&game, 0).expect("perft").nodes, 1);
        assert_eq!(perft(&game, 1).expect("perft").nodes, 20);

        let depth_two = perft(&game, 2).expect("perft");
        assert_eq!(depth_two.nodes, 400);
        assert_eq!(depth_two.captures, 0);
        assert_eq!(depth_two.checks, 0);
    }

    #[test]
    fn opening_position_depth_three() {
        let counts = perft(&Board::new_game(), 3).expect("perft");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 8902,
                captures: 34,
                castles: 0,
                promotions: 0,
                checks: 12,
                checkmates: 0,
            }
        );
    }

    #[test]
    fn castles_and_mates_are_classified() {
        let castling = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen");
        let counts = perft(&castling, 1).expect("perft");
        assert_eq!(counts.nodes, 26);
        assert_eq!(counts.castles, 2);
        assert_eq!(counts.captures, 2);

        let back_rank = Board::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("fen");
        let counts = perft(&back_rank, 1).expect("perft");
        assert_eq!(counts.checkmates, 1);
        assert_eq!(counts.checks, 1);

        let promotion = Board::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").expect("fen");
        assert_eq!(perft(&promotion, 1).expect("perft").promotions, 1);
    }

    #[test]
    fn terminal_positions_have_no_children() {
        let mate = Board::from_fen("Q5k1/8/6K1/8/8/8/8/8 b - - 1 1").expect("fen");
        assert_eq!(perft(&mate, 2).expect("perft"), PerftCounts::default());
    }

    #[test]
    fn divide_sums_to_perft() {
        let game = Board::new_game();
        let divided = perft_divide(&game, 2).expect("divide");
        assert_eq!(divided.len(), 20);
        assert!(divided.iter().all(|(_, nodes)| *nodes == 20));
        let total: usize = divided.iter().map(|(_, nodes)| nodes).sum();
        assert_eq!(total, perft(&game, 2).expect("perft").nodes);
    }
}

//! Pseudo-legal and legal move generation.
//!
//! Pseudo moves come straight from the per-piece destination groups filtered
//! by occupancy, in a fixed order: origin squares ascending from a1 to h8,
//! then each piece's direction order, then castling candidates last. Legal
//! moves replay every pseudo move on a cloned board and keep those that do
//! not leave the mover's own king attacked.

use std::fmt;

use crate::board::board::Board;
use crate::board::chess_rules::{king_home_square, CastleSide};
use crate::board::chess_types::{Color, PieceKind, Square};
use crate::chess_errors::ChessErrors;
use crate::move_generation::check_detection::{is_in_check, is_square_attacked};
use crate::moves::move_description::{castle_side, ChessMove};

/// Why a side has no legal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalState {
    CheckMate,
    Stalemate,
}

impl fmt::Display for TerminalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminalState::CheckMate => write!(f, "checkmate"),
            TerminalState::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Outcome of legal move generation: a non-empty move list or a terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegalMoves {
    Moves(Vec<ChessMove>),
    Terminal(TerminalState),
}

impl LegalMoves {
    /// The move list, or `ChessErrors::GameOver` for a terminal position.
    pub fn into_moves(self) -> Result<Vec<ChessMove>, ChessErrors> {
        match self {
            LegalMoves::Moves(moves) => Ok(moves),
            LegalMoves::Terminal(state) => Err(ChessErrors::GameOver(state)),
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, LegalMoves::Terminal(_))
    }
}

/// Candidate moves of `color` ignoring whether its own king ends up attacked.
pub fn generate_pseudo_moves(board: &Board, color: Color) -> Vec<ChessMove> {
    let mut moves = Vec::with_capacity(48);
    let is_enemy = |square: Square| board.piece_at(square).is_some_and(|p| p.color != color);

    for (from, piece) in board.pieces(color) {
        for group in piece.all_moves(from, board) {
            if piece.kind == PieceKind::Pawn {
                let advance = group.first().is_some_and(|square| square.file == from.file);
                if advance {
                    for to in group {
                        if board.piece_at(to).is_some() {
                            break;
                        }
                        moves.push(ChessMove::new(from, to));
                    }
                } else {
                    moves.extend(
                        group
                            .into_iter()
                            .filter(|to| is_enemy(*to))
                            .map(|to| ChessMove::new(from, to)),
                    );
                }
            } else {
                // Slider runs end on their first occupied square, so this only
                // ever drops the last square of a run.
                moves.extend(
                    group
                        .into_iter()
                        .filter(|to| board.piece_at(*to).is_none() || is_enemy(*to))
                        .map(|to| ChessMove::new(from, to)),
                );
            }
        }
    }

    let home = king_home_square(color);
    for side in CastleSide::BOTH {
        if board.castling_available(color, side) {
            moves.push(ChessMove::new(home, side.king_destination(color)));
        }
    }

    moves
}

/// Legal moves of `color`, or the terminal state when there are none.
///
/// Fails with `ChessErrors::CorruptedState` if a generated move cannot be
/// replayed on the board.
pub fn generate_legal_moves(board: &Board, color: Color) -> Result<LegalMoves, ChessErrors> {
    let king = board.king_square(color);
    let in_check = is_in_check(board, color);
    let mut legal = Vec::new();

    for mv in generate_pseudo_moves(board, color) {
        let castling = board
            .piece_at(mv.from)
            .and_then(|piece| castle_side(&piece, mv.from, mv.to));
        // Stricter than the board's own castling check: no castling out of or through check.
        if let Some(side) = castling {
            if in_check || is_square_attacked(board, side.king_transit_square(color), color.opposite()) {
                continue;
            }
        }

        // A piece off every line through its king cannot uncover an attack.
        if !in_check && mv.from != king && !shares_line(mv.from, king) {
            legal.push(mv);
            continue;
        }

        let mut trial = board.clone();
        trial.set_side_to_move(color);
        trial.apply_move(mv).map_err(|err| {
            ChessErrors::CorruptedState(format!("generated move {mv} does not replay: {err}"))
        })?;
        if !is_in_check(&trial, color) {
            legal.push(mv);
        }
    }

    if legal.is_empty() {
        let state = if in_check {
            TerminalState::CheckMate
        } else {
            TerminalState::Stalemate
        };
        return Ok(LegalMoves::Terminal(state));
    }
    Ok(LegalMoves::Moves(legal))
}

#[inline]
fn shares_line(a: Square, b: Square) -> bool {
    let delta = a - b;
    delta.is_orthogonal() || delta.is_diagonal()
}

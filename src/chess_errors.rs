//! Errors used throughout the chess engine.
//!
//! `ChessErrors` is the single error type returned by board mutation, move
//! generation, search and the parsing utilities.
//!
//! Usage guidelines:
//! - `IllegalMove` and the parsing variants are recoverable: the board is left
//!   untouched and the caller can report the reason and ask for another move.
//! - `IllegalGeometry` is the expected answer of `Piece::path` for a delta the
//!   piece cannot travel; `Board` wraps it into `IllegalMove`.
//! - `GameOver` is not a failure of the call itself. It reports that the side
//!   to move has no legal move and must be handled apart from illegal input.
//! - `CorruptedState` means generated moves failed to replay on the board.
//!   That is a bug in move generation, not something a user can cause.

use thiserror::Error;

use crate::board::chess_types::{PieceKind, Square};
use crate::board::vector::Vector;
use crate::move_generation::legal_move_generator::TerminalState;

/// Unified error type for the chess engine.
///
/// Input-related variants (`IllegalMove`, `InvalidAlgebraicString`,
/// `InvalidFenString`, `InvalidOption`) are suitable for showing to a user.
/// `CorruptedState` is internal and should be treated as a bug report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessErrors {
    /// `Board::move_piece` refused the move; the board is unchanged.
    ///
    /// Payload: origin, destination and the first rule the move broke.
    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    /// The delta does not match the movement pattern of the piece kind, or
    /// one of the squares handed to `Piece::path` is off the board.
    #[error("a {kind} cannot travel by {delta}")]
    IllegalGeometry { kind: PieceKind, delta: Vector },

    /// A square or long-algebraic move string failed to parse.
    ///
    /// Payload: a description naming the offending input.
    #[error("invalid algebraic string: {0}")]
    InvalidAlgebraicString(String),

    /// A FEN record was malformed or described an impossible position (wrong
    /// king count, pawn on a back rank, side not to move in check).
    #[error("invalid FEN string: {0}")]
    InvalidFenString(String),

    /// The side to move has no legal move.
    ///
    /// Payload: whether the game ended by checkmate or stalemate.
    #[error("game over: {0}")]
    GameOver(TerminalState),

    /// `Engine::set_option` got an unknown name or an out-of-range value.
    #[error("invalid engine option: {0}")]
    InvalidOption(String),

    /// A generated move failed to replay on a cloned board. Not recoverable.
    #[error("corrupted game state: {0}")]
    CorruptedState(String),
}

/// Why `Board::move_piece` refused a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMoveReason {
    #[error("coordinate outside the board")]
    OutOfBounds,
    #[error("no piece on the origin square")]
    EmptyOrigin,
    #[error("not your turn")]
    WrongSideToMove,
    #[error("path blocked at {0}")]
    BlockedPath(Square),
    #[error("destination holds a piece of the same color")]
    OwnPieceOnDestination,
    #[error("pawns capture diagonally only onto an enemy piece")]
    PawnDiagonalOntoEmptySquare,
    #[error("pawns cannot capture straight ahead")]
    PawnBlocked,
    #[error("castling requires an unmoved king and rook with nothing between them")]
    CastlingNotAllowed,
    #[error("cannot promote to a {0}")]
    InvalidPromotion(PieceKind),
    #[error("a {kind} cannot travel by {delta}")]
    Geometry { kind: PieceKind, delta: Vector },
}

impl ChessErrors {
    pub(crate) fn illegal(from: Square, to: Square, reason: IllegalMoveReason) -> Self {
        ChessErrors::IllegalMove { from, to, reason }
    }
}

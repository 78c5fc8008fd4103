//! Engine abstraction used by front-ends.
//!
//! A protocol loop hands the current board and the per-move limits to an
//! `Engine` and prints whatever comes back: the chosen move plus UCI-style
//! `info` lines describing the search.

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::moves::move_description::ChessMove;

/// Per-move search limits. Unset fields fall back to the engine options.
#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Search depth in plies for this move only.
    pub depth: Option<u8>,
    /// Soft time budget in milliseconds, checked between root moves.
    pub movetime_ms: Option<u64>,
}

/// What an engine reports back for one `go`.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// Chosen move.
    pub best_move: Option<ChessMove>,
    /// Absolute search score of `best_move` in centipawns, positive for Black.
    pub score: Option<i32>,
    /// Ready-to-print `info ...` lines in the order they were produced.
    pub info_lines: Vec<String>,
}

/// A move-choosing strategy driven by a protocol loop.
pub trait Engine: Send {
    /// Name reported in `id name`.
    fn name(&self) -> &str;
    /// Author reported in `id author`.
    fn author(&self) -> &str;

    /// Drop any state carried between moves of the previous game.
    fn new_game(&mut self) {}
    /// Apply a `setoption`. Implementations reject an unknown name or a bad
    /// value with `ChessErrors::InvalidOption`.
    fn set_option(&mut self, _name: &str, _value: &str) -> Result<(), ChessErrors> {
        Ok(())
    }

    /// Fails with `ChessErrors::GameOver` when the side to move has no legal move.
    fn choose_move(&mut self, board: &Board, params: &GoParams) -> Result<EngineOutput, ChessErrors>;
}

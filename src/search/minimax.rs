//! Depth-limited minimax search with alpha-beta pruning.
//!
//! Scores are absolute (see `board_scoring`): Black is the maximizing side and
//! White the minimizing side, so the two roles are written as a pair of
//! mutually recursive functions instead of a negamax. At the root the first
//! move reaching the best score is kept; later moves replace it only on a
//! strict improvement.

use std::time::Instant;

use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::chess_errors::ChessErrors;
use crate::move_generation::legal_move_generator::{generate_legal_moves, LegalMoves, TerminalState};
use crate::moves::move_description::ChessMove;
use crate::search::board_scoring::{BoardScorer, MAXIMIZING_COLOR};

pub const CHECKMATE_SCORE: i32 = 50_000;
pub const STALEMATE_SCORE: i32 = 39_000;
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

const SCORE_BOUND: i32 = i32::MAX;

/// Limits and terminal scores for one search.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Plies to search. Zero is treated as one.
    pub max_depth: u8,
    /// Magnitude returned for a mated node, signed toward the mating side.
    pub checkmate_score: i32,
    /// Magnitude returned for a stalemated node, signed toward the stalemated side.
    pub stalemate_score: i32,
    /// Checked between root moves only; the first root move is always searched.
    pub deadline: Option<Instant>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
            checkmate_score: CHECKMATE_SCORE,
            stalemate_score: STALEMATE_SCORE,
            deadline: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: ChessMove,
    /// Absolute score of `best_move`; positive favours Black.
    pub score: i32,
    /// Depth actually searched after clamping.
    pub depth: u8,
    /// Nodes visited, root included.
    pub nodes: u64,
    /// False when the deadline cut the root move loop short.
    pub completed: bool,
}

/// Best move for the side to move, searched with alpha-beta pruning.
///
/// A depth below one is searched as depth one. Fails with
/// `ChessErrors::GameOver` when the side to move has no legal move.
pub fn alpha_beta_search<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> Result<SearchResult, ChessErrors> {
    Searcher::new(scorer, config, true).search_root(board)
}

/// Same search without pruning. Returns the same move and score as
/// `alpha_beta_search` while visiting every node.
pub fn minimax_search<S: BoardScorer>(
    board: &Board,
    scorer: &S,
    config: SearchConfig,
) -> Result<SearchResult, ChessErrors> {
    Searcher::new(scorer, config, false).search_root(board)
}

/// Score of a node whose side to move has no legal move.
pub fn terminal_score(state: TerminalState, stuck: Color, config: &SearchConfig) -> i32 {
    let favours_maximizer = match state {
        TerminalState::CheckMate => stuck != MAXIMIZING_COLOR,
        // Stalemate is scored in favour of the stalemated side.
        TerminalState::Stalemate => stuck == MAXIMIZING_COLOR,
    };
    let magnitude = match state {
        TerminalState::CheckMate => config.checkmate_score,
        TerminalState::Stalemate => config.stalemate_score,
    };
    if favours_maximizer {
        magnitude
    } else {
        -magnitude
    }
}

struct Searcher<'a, S: BoardScorer> {
    scorer: &'a S,
    config: SearchConfig,
    pruning: bool,
    nodes: u64,
}

impl<'a, S: BoardScorer> Searcher<'a, S> {
    fn new(scorer: &'a S, config: SearchConfig, pruning: bool) -> Self {
        Self {
            scorer,
            config,
            pruning,
            nodes: 0,
        }
    }

    fn search_root(&mut self, board: &Board) -> Result<SearchResult, ChessErrors> {
        let mover = board.side_to_move();
        let moves = generate_legal_moves(board, mover)?.into_moves()?;
        let maximizing = mover == MAXIMIZING_COLOR;
        let depth = self.config.max_depth.max(1);
        self.nodes = 1;

        let mut alpha = -SCORE_BOUND;
        let mut beta = SCORE_BOUND;
        let mut best: Option<(ChessMove, i32)> = None;
        let mut completed = true;

        for mv in moves {
            if best.is_some() && self.deadline_passed() {
                completed = false;
                break;
            }

            let child = play(board, mv)?;
            let score = if maximizing {
                self.minimize(&child, depth - 1, alpha, beta)?
            } else {
                self.maximize(&child, depth - 1, alpha, beta)?
            };

            let improves = match best {
                None => true,
                Some((_, best_score)) if maximizing => score > best_score,
                Some((_, best_score)) => score < best_score,
            };
            if improves {
                best = Some((mv, score));
            }
            if self.pruning {
                if maximizing {
                    alpha = alpha.max(score);
                } else {
                    beta = beta.min(score);
                }
            }
        }

        let (best_move, score) = best.ok_or_else(|| {
            ChessErrors::CorruptedState("root search finished without a move".to_owned())
        })?;
        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            completed,
        })
    }

    fn maximize(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, ChessErrors> {
        self.nodes += 1;
        if depth == 0 {
            return Ok(self.scorer.score(board));
        }
        let moves = match generate_legal_moves(board, board.side_to_move())? {
            LegalMoves::Moves(moves) => moves,
            LegalMoves::Terminal(state) => {
                return Ok(terminal_score(state, board.side_to_move(), &self.config));
            }
        };

        let mut value = -SCORE_BOUND;
        for mv in moves {
            let child = play(board, mv)?;
            value = value.max(self.minimize(&child, depth - 1, alpha, beta)?);
            alpha = alpha.max(value);
            if self.pruning && alpha >= beta {
                break;
            }
        }
        Ok(value)
    }

    fn minimize(
        &mut self,
        board: &Board,
        depth: u8,
        alpha: i32,
        mut beta: i32,
    ) -> Result<i32, ChessErrors> {
        self.nodes += 1;
        if depth == 0 {
            return Ok(self.scorer.score(board));
        }
        let moves = match generate_legal_moves(board, board.side_to_move())? {
            LegalMoves::Moves(moves) => moves,
            LegalMoves::Terminal(state) => {
                return Ok(terminal_score(state, board.side_to_move(), &self.config));
            }
        };

        let mut value = SCORE_BOUND;
        for mv in moves {
            let child = play(board, mv)?;
            value = value.min(self.maximize(&child, depth - 1, alpha, beta)?);
            beta = beta.min(value);
            if self.pruning && alpha >= beta {
                break;
            }
        }
        Ok(value)
    }

    fn deadline_passed(&self) -> bool {
        self.config.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

fn play(board: &Board, mv: ChessMove) -> Result<Board, ChessErrors> {
    let mut child = board.clone();
    child.apply_move(mv).map_err(|err| {
        ChessErrors::CorruptedState(format!("searched move {mv} does not replay: {err}"))
    })?;
    Ok(child)
}

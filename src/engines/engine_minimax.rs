//! Fixed-depth alpha-beta engine.
//!
//! Options:
//! - `Depth`: search depth in plies, `1..=8`, default 4.
//! - `MoveTime`: soft per-move budget in milliseconds, `0` disables it. The
//!   budget is only checked between root moves.

use std::time::{Duration, Instant};

use crate::board::board::Board;
use crate::chess_errors::ChessErrors;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::search::board_scoring::{BoardScorer, MaterialPositionScorer};
use crate::search::minimax::{alpha_beta_search, SearchConfig, SearchResult};

pub const MAX_DEPTH_OPTION: u8 = 8;

pub struct EngineMinimax<S: BoardScorer = MaterialPositionScorer> {
    config: SearchConfig,
    movetime_ms: Option<u64>,
    scorer: S,
}

impl EngineMinimax {
    pub fn new(default_depth: u8) -> Self {
        Self::with_scorer(default_depth, MaterialPositionScorer)
    }
}

impl Default for EngineMinimax {
    fn default() -> Self {
        Self::with_config(SearchConfig::default(), MaterialPositionScorer)
    }
}

impl<S: BoardScorer> EngineMinimax<S> {
    pub fn with_scorer(default_depth: u8, scorer: S) -> Self {
        let config = SearchConfig {
            max_depth: default_depth.max(1),
            ..SearchConfig::default()
        };
        Self::with_config(config, scorer)
    }

    pub fn with_config(config: SearchConfig, scorer: S) -> Self {
        Self {
            config,
            movetime_ms: None,
            scorer,
        }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Searches the side to move with the engine options.
    pub fn search(&self, board: &Board) -> Result<SearchResult, ChessErrors> {
        alpha_beta_search(board, &self.scorer, self.resolve(&GoParams::default()))
    }

    /// Best move as a coordinate string such as `b8c6`.
    pub fn best_move_algebraic(&self, board: &Board) -> Result<String, ChessErrors> {
        Ok(self.search(board)?.best_move.to_long_algebraic())
    }

    fn resolve(&self, params: &GoParams) -> SearchConfig {
        let budget = params.movetime_ms.or(self.movetime_ms).filter(|ms| *ms > 0);
        SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth).max(1),
            deadline: budget.map(|ms| Instant::now() + Duration::from_millis(ms)),
            ..self.config
        }
    }
}

impl<S: BoardScorer> Engine for EngineMinimax<S> {
    fn name(&self) -> &str {
        "Minimax Chess"
    }

    fn author(&self) -> &str {
        "minimax_chess authors"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessErrors> {
        let invalid = || ChessErrors::InvalidOption(format!("{name} = {value}"));
        match name.trim().to_ascii_lowercase().as_str() {
            "depth" => {
                let depth: u8 = value.trim().parse().map_err(|_| invalid())?;
                if !(1..=MAX_DEPTH_OPTION).contains(&depth) {
                    return Err(invalid());
                }
                self.config.max_depth = depth;
            }
            "movetime" => {
                let ms: u64 = value.trim().parse().map_err(|_| invalid())?;
                self.movetime_ms = (ms > 0).then_some(ms);
            }
            _ => return Err(ChessErrors::InvalidOption(format!("unknown option {name}"))),
        }
        Ok(())
    }

    fn choose_move(&mut self, board: &Board, params: &GoParams) -> Result<EngineOutput, ChessErrors> {
        let config = self.resolve(params);
        let started = Instant::now();
        let result = alpha_beta_search(board, &self.scorer, config)?;
        let elapsed_ms = started.elapsed().as_millis();

        let mut out = EngineOutput {
            best_move: Some(result.best_move),
            score: Some(result.score),
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} score cp {} nodes {} time {} pv {}",
            result.depth, result.score, result.nodes, elapsed_ms, result.best_move
        ));
        if !result.completed {
            out.info_lines
                .push("info string movetime expired before all root moves were searched".to_owned());
        }
        Ok(out)
    }
}

//! Crate root module declarations for the minimax chess engine.
//!
//! The crate is organised from the leaves up: board representation, per-piece
//! movement geometry, legal move generation with check detection, and a
//! depth-limited alpha-beta search behind a small engine facade. A protocol
//! loop lives outside this crate and talks to it through `Board` and the
//! `Engine` trait.

pub mod chess_errors;

pub mod board {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod vector;
}

pub mod moves {
    pub mod move_description;
    pub mod piece_movement;
    pub mod piece_paths;
    pub mod square_tables;
}

pub mod move_generation {
    pub mod check_detection;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub use board::board::Board;
pub use board::chess_types::{Color, Piece, PieceKind, Square};
pub use chess_errors::ChessErrors;
pub use engines::engine_minimax::EngineMinimax;
pub use move_generation::legal_move_generator::{LegalMoves, TerminalState};
pub use moves::move_description::ChessMove;

//! Board state and move application.
//!
//! `Board` is a value type: the search clones it for every branch, so sibling
//! branches never observe each other's mutations. All mutation funnels through
//! `execute`, which is the only code writing the square array, the king-square
//! cache and the capture history; validation always completes before it runs,
//! so a rejected move leaves the board untouched.

use crate::board::chess_rules::{king_home_square, CastleSide, BACK_RANK};
use crate::board::chess_types::{Color, Piece, PieceKind, Square};
use crate::chess_errors::{ChessErrors, IllegalMoveReason};
use crate::move_generation::check_detection::is_in_check;
use crate::move_generation::legal_move_generator::{generate_legal_moves, LegalMoves, TerminalState};
use crate::moves::move_description::{castle_side, is_promotion, ChessMove};
use crate::utils::algebraic::{algebraic_to_square, parse_long_algebraic};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
    side_to_move: Color,
    white_king: Square,
    black_king: Square,
    captured_pieces: Vec<Piece>,
}

/// What a validated move does to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveAction {
    Quiet,
    Capture,
    Castle(CastleSide),
    Promote { kind: PieceKind, capture: bool },
}

impl Default for Board {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Board {
    /// Standard initial position, White to move.
    pub fn new_game() -> Self {
        let mut squares = [None; 64];
        for (file, kind) in BACK_RANK.iter().enumerate() {
            for color in [Color::White, Color::Black] {
                let home = Square::new(color.home_rank(), file as i8);
                let pawns = Square::new(color.pawn_start_rank(), file as i8);
                squares[home.index()] = Some(Piece::new(*kind, color));
                squares[pawns.index()] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        Self {
            squares,
            side_to_move: Color::White,
            white_king: king_home_square(Color::White),
            black_king: king_home_square(Color::Black),
            captured_pieces: Vec::new(),
        }
    }

    /// Builds a board from a raw square array, locating both kings.
    ///
    /// Fails unless each color has exactly one king.
    pub(crate) fn from_squares(
        squares: [Option<Piece>; 64],
        side_to_move: Color,
    ) -> Result<Self, ChessErrors> {
        let mut kings: [Vec<Square>; 2] = [Vec::new(), Vec::new()];
        for (index, piece) in squares.iter().enumerate() {
            if let Some(piece) = piece {
                if piece.kind == PieceKind::King {
                    kings[piece.color.index()].push(Square::from_index(index));
                }
            }
        }
        let [white, black] = kings;
        match (white.as_slice(), black.as_slice()) {
            ([white_king], [black_king]) => Ok(Self {
                squares,
                side_to_move,
                white_king: *white_king,
                black_king: *black_king,
                captured_pieces: Vec::new(),
            }),
            _ => Err(ChessErrors::InvalidFenString(format!(
                "expected one king per color, found {} white and {} black",
                white.len(),
                black.len()
            ))),
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessErrors> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    /// Piece on `square`; `None` for empty or off-board squares.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if square.is_on_board() {
            self.squares[square.index()]
        } else {
            None
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Cached king position; kept in sync by every king move, castling included.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    /// Captured pieces in capture order.
    #[inline]
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    /// Every square with its content, row-major from a1 to h8.
    pub fn all_figures(&self) -> impl Iterator<Item = (Square, Option<Piece>)> + '_ {
        Square::all().map(move |square| (square, self.squares[square.index()]))
    }

    /// Pieces of `color` in ascending square order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.all_figures()
            .filter_map(move |(square, piece)| match piece {
                Some(piece) if piece.color == color => Some((square, piece)),
                _ => None,
            })
    }

    /// Moves the piece on `from` to `to`, auto-promoting pawns to queens.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), ChessErrors> {
        self.move_with_promotion(from, to, None)
    }

    #[inline]
    pub fn apply_move(&mut self, mv: ChessMove) -> Result<(), ChessErrors> {
        self.move_with_promotion(mv.from, mv.to, None)
    }

    /// Like `move_piece`, with an explicit promotion choice. `None` promotes
    /// to a queen; a choice on a move that does not promote is rejected.
    pub fn move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), ChessErrors> {
        let action = self.validate_move(from, to, promotion)?;
        self.execute(from, to, action);
        Ok(())
    }

    /// Applies a move given as two algebraic squares, e.g. `("e2", "e4")`.
    pub fn apply_move_algebraic(&mut self, from: &str, to: &str) -> Result<(), ChessErrors> {
        let from = algebraic_to_square(from)?;
        let to = algebraic_to_square(to)?;
        self.move_piece(from, to)
    }

    /// Applies a coordinate move such as `e2e4` or `e7e8n`.
    pub fn apply_long_algebraic(&mut self, text: &str) -> Result<(), ChessErrors> {
        let (mv, promotion) = parse_long_algebraic(text)?;
        self.move_with_promotion(mv.from, mv.to, promotion)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(self, color)
    }

    pub fn all_legal_moves(&self, color: Color) -> Result<LegalMoves, ChessErrors> {
        generate_legal_moves(self, color)
    }

    /// Terminal state of the side to move, `None` while the game goes on.
    pub fn is_terminal(&self) -> Result<Option<TerminalState>, ChessErrors> {
        match generate_legal_moves(self, self.side_to_move)? {
            LegalMoves::Moves(_) => Ok(None),
            LegalMoves::Terminal(state) => Ok(Some(state)),
        }
    }

    #[inline]
    pub fn render_text(&self) -> String {
        render_board(self)
    }

    /// Used by the move generator to try moves for the side not on move.
    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Unmoved king and rook of `color` still stand on their home squares.
    pub fn has_castling_rights(&self, color: Color, side: CastleSide) -> bool {
        let king_ready = matches!(
            self.piece_at(king_home_square(color)),
            Some(Piece { kind: PieceKind::King, color: c, has_moved: false }) if c == color
        );
        let rook_ready = matches!(
            self.piece_at(side.rook_origin(color)),
            Some(Piece { kind: PieceKind::Rook, color: c, has_moved: false }) if c == color
        );
        king_ready && rook_ready
    }

    /// True when `side` may castle as far as the board itself is concerned:
    /// castling rights intact and nothing between king and rook.
    pub fn castling_available(&self, color: Color, side: CastleSide) -> bool {
        self.has_castling_rights(color, side)
            && side
                .files_between()
                .all(|file| self.piece_at(Square::new(color.home_rank(), file)).is_none())
    }

    fn validate_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<MoveAction, ChessErrors> {
        let illegal = |reason| ChessErrors::illegal(from, to, reason);

        if !from.is_on_board() || !to.is_on_board() {
            return Err(illegal(IllegalMoveReason::OutOfBounds));
        }
        let piece = self
            .piece_at(from)
            .ok_or_else(|| illegal(IllegalMoveReason::EmptyOrigin))?;
        if piece.color != self.side_to_move {
            return Err(illegal(IllegalMoveReason::WrongSideToMove));
        }

        // Castling skips the ordinary path and destination rules.
        if let Some(side) = castle_side(&piece, from, to) {
            if !self.castling_available(piece.color, side) {
                return Err(illegal(IllegalMoveReason::CastlingNotAllowed));
            }
            return Ok(MoveAction::Castle(side));
        }

        let promotes = is_promotion(&piece, to);
        if let Some(kind) = promotion {
            if !promotes || matches!(kind, PieceKind::Pawn | PieceKind::King) {
                return Err(illegal(IllegalMoveReason::InvalidPromotion(kind)));
            }
        }

        let path = piece.path(from, to).map_err(|err| match err {
            ChessErrors::IllegalGeometry { kind, delta } => {
                illegal(IllegalMoveReason::Geometry { kind, delta })
            }
            other => other,
        })?;
        if let Some(blocker) = path.into_iter().find(|square| self.piece_at(*square).is_some()) {
            return Err(illegal(IllegalMoveReason::BlockedPath(blocker)));
        }

        let target = self.piece_at(to);
        if piece.kind == PieceKind::Pawn {
            let diagonal = from.file != to.file;
            if diagonal && target.is_none() {
                return Err(illegal(IllegalMoveReason::PawnDiagonalOntoEmptySquare));
            }
            if !diagonal && target.is_some() {
                return Err(illegal(IllegalMoveReason::PawnBlocked));
            }
        }

        let capture = match target {
            Some(defender) if defender.color == piece.color => {
                return Err(illegal(IllegalMoveReason::OwnPieceOnDestination));
            }
            Some(_) => true,
            None => false,
        };

        Ok(if promotes {
            MoveAction::Promote {
                kind: promotion.unwrap_or(PieceKind::Queen),
                capture,
            }
        } else if capture {
            MoveAction::Capture
        } else {
            MoveAction::Quiet
        })
    }

    fn execute(&mut self, from: Square, to: Square, action: MoveAction) {
        let mover = self.side_to_move;
        match action {
            MoveAction::Quiet => self.relocate(from, to),
            MoveAction::Capture => self.capture(from, to),
            MoveAction::Castle(side) => {
                self.relocate(from, to);
                self.relocate(side.rook_origin(mover), side.rook_destination(mover));
            }
            MoveAction::Promote { kind, capture } => {
                if capture {
                    self.capture(from, to);
                } else {
                    self.relocate(from, to);
                }
                self.squares[to.index()] = Some(Piece {
                    kind,
                    color: mover,
                    has_moved: true,
                });
            }
        }
        self.side_to_move = mover.opposite();
    }

    fn capture(&mut self, from: Square, to: Square) {
        match (self.squares[from.index()], self.squares[to.index()]) {
            (Some(attacker), Some(defender)) if attacker.color != defender.color => {
                self.squares[to.index()] = None;
                self.captured_pieces.push(defender);
                self.relocate(from, to);
            }
            _ => panic!("capture {from} -> {to} needs an attacker and an enemy defender"),
        }
    }

    fn relocate(&mut self, from: Square, to: Square) {
        let Some(mut piece) = self.squares[from.index()].take() else {
            panic!("relocate from empty square {from}");
        };
        piece.has_moved = true;
        if piece.kind == PieceKind::King {
            match piece.color {
                Color::White => self.white_king = to,
                Color::Black => self.black_king = to,
            }
        }
        self.squares[to.index()] = Some(piece);
    }
}

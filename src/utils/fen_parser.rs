//! FEN-to-Board parser.
//!
//! Reads the placement, side-to-move and castling fields. The en-passant
//! field is validated but not used since en passant is not played, and the
//! move clocks are optional. Castling rights are folded into the `has_moved`
//! flags of kings and rooks: a king or rook only counts as unmoved when a
//! castling right refers to it.

use crate::board::board::Board;
use crate::board::chess_rules::{king_home_square, CastleSide};
use crate::board::chess_types::{Color, Piece, PieceKind, Square};
use crate::chess_errors::ChessErrors;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> Result<Board, ChessErrors> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().unwrap_or("-");
    let en_passant_part = parts.next().unwrap_or("-");
    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("bad move clock {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut squares = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;
    if en_passant_part != "-" {
        algebraic_to_square(en_passant_part)
            .map_err(|_| invalid(&format!("bad en-passant square {en_passant_part}")))?;
    }

    apply_castling_rights(&mut squares, &rights)?;
    let board = Board::from_squares(squares, side_to_move)?;
    if board.is_in_check(side_to_move.opposite()) {
        return Err(invalid("the side not to move is in check"));
    }
    Ok(board)
}

fn invalid(reason: &str) -> ChessErrors {
    ChessErrors::InvalidFenString(reason.to_owned())
}

fn parse_board(board_part: &str) -> Result<[Option<Piece>; 64], ChessErrors> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut squares = [None; 64];
    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file = 0i8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as i8;
                if file > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("invalid piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }
            if piece.kind == PieceKind::Pawn && (rank == 0 || rank == 7) {
                return Err(invalid("pawn on the first or last rank"));
            }

            let square = Square::new(rank, file);
            squares[square.index()] = Some(initial_flags(piece, square));
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(squares)
}

/// Pieces away from their starting rank have moved; kings and rooks are
/// settled later by the castling field.
fn initial_flags(mut piece: Piece, square: Square) -> Piece {
    piece.has_moved = match piece.kind {
        PieceKind::Pawn => square.rank != piece.color.pawn_start_rank(),
        PieceKind::King | PieceKind::Rook => true,
        _ => square.rank != piece.color.home_rank(),
    };
    piece
}

fn parse_side_to_move(side_part: &str) -> Result<Color, ChessErrors> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(&format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<Vec<(Color, CastleSide)>, ChessErrors> {
    if castling_part == "-" {
        return Ok(Vec::new());
    }

    let mut rights = Vec::with_capacity(4);
    for ch in castling_part.chars() {
        let right = match ch {
            'K' => (Color::White, CastleSide::Short),
            'Q' => (Color::White, CastleSide::Long),
            'k' => (Color::Black, CastleSide::Short),
            'q' => (Color::Black, CastleSide::Long),
            _ => return Err(invalid(&format!("invalid castling rights character: {ch}"))),
        };
        if !rights.contains(&right) {
            rights.push(right);
        }
    }
    Ok(rights)
}

fn apply_castling_rights(
    squares: &mut [Option<Piece>; 64],
    rights: &[(Color, CastleSide)],
) -> Result<(), ChessErrors> {
    for (color, side) in rights {
        let king = king_home_square(*color);
        let rook = side.rook_origin(*color);
        for (square, kind) in [(king, PieceKind::King), (rook, PieceKind::Rook)] {
            match squares[square.index()].as_mut() {
                Some(piece) if piece.kind == kind && piece.color == *color => piece.has_moved = false,
                _ => {
                    return Err(invalid(&format!(
                        "castling right without {color} {kind} on {square}"
                    )))
                }
            }
        }
    }
    Ok(())
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };
    PieceKind::from_letter(ch).map(|kind| Piece::new(kind, color))
}

use crate::board::board::Board;
use crate::board::chess_rules::CastleSide;
use crate::board::chess_types::{Color, Square};

/// FEN of the board. En passant is never available and the move clocks are
/// not tracked, so the last three fields are always `- 0 1`.
pub fn generate_fen(board: &Board) -> String {
    let side_to_move = match board.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    format!(
        "{} {} {} - 0 1",
        generate_board_field(board),
        side_to_move,
        generate_castling_field(board)
    )
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8 {
            if let Some(piece) = board.piece_at(Square::new(rank, file)) {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_letter());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();
    for (color, side, letter) in [
        (Color::White, CastleSide::Short, 'K'),
        (Color::White, CastleSide::Long, 'Q'),
        (Color::Black, CastleSide::Short, 'k'),
        (Color::Black, CastleSide::Long, 'q'),
    ] {
        if board.has_castling_rights(color, side) {
            out.push(letter);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

//! Coordinate notation: squares such as `e4` and moves such as `e2e4` or
//! `e7e8n`.

use crate::board::chess_types::{PieceKind, Square};
use crate::chess_errors::ChessErrors;
use crate::moves::move_description::ChessMove;

/// Convert a square name (for example: "e4") to a `Square`.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(square.to_owned());
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(invalid());
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(invalid());
    }

    Ok(Square::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert an on-board `Square` to its name (for example: "e4").
pub fn square_to_algebraic(square: Square) -> Result<String, ChessErrors> {
    if !square.is_on_board() {
        return Err(ChessErrors::InvalidAlgebraicString(square.to_string()));
    }
    Ok(square.to_string())
}

/// Parse a coordinate move with an optional promotion letter.
pub fn parse_long_algebraic(text: &str) -> Result<(ChessMove, Option<PieceKind>), ChessErrors> {
    let invalid = || ChessErrors::InvalidAlgebraicString(text.to_owned());
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(letter) => match PieceKind::from_letter(letter) {
            Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => {
                Some(kind)
            }
            _ => return Err(invalid()),
        },
    };

    Ok((ChessMove::new(from, to), promotion))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(0, 0));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(7, 7));
        assert_eq!(algebraic_to_square("E4").expect("uppercase file"), Square::new(3, 4));
        assert_eq!(square_to_algebraic(Square::new(5, 2)).expect("c6"), "c6");
    }

    #[test]
    fn malformed_squares_are_rejected() {
        for bad in ["", "e", "e44", "i1", "a0", "a9", "4e"] {
            assert!(
                matches!(algebraic_to_square(bad), Err(ChessErrors::InvalidAlgebraicString(_))),
                "{bad} should be rejected"
            );
        }
        assert!(square_to_algebraic(Square::new(8, 0)).is_err());
    }

    #[test]
    fn long_algebraic_moves() {
        let (mv, promotion) = parse_long_algebraic("b8c6").expect("plain move");
        assert_eq!(mv, ChessMove::new(Square::new(7, 1), Square::new(5, 2)));
        assert_eq!(promotion, None);

        let (mv, promotion) = parse_long_algebraic("e7e8n").expect("promotion");
        assert_eq!(mv.to, Square::new(7, 4));
        assert_eq!(promotion, Some(PieceKind::Knight));

        for bad in ["e2e", "e2e4k", "e2e4p", "e2e4qq", "e2-e4", "é2e4"] {
            assert!(parse_long_algebraic(bad).is_err(), "{bad} should be rejected");
        }
    }
}

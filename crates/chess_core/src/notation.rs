//! Long algebraic move notation: origin square, destination square, and an
//! optional promotion letter (`e2e4`, `e7e8q`).

use thiserror::Error;

use crate::{board::Position, movegen::legal_moves, types::*};

/// Rejections from [`parse_lan`]. The first three are malformed syntax; the
/// last is a well-formed move absent from the legal move list.
#[derive(Debug, Error)]
pub enum ParseMoveError {
    #[error("move must be 4 or 5 characters like e2e4 or e7e8q, got {0:?}")]
    BadLength(String),
    #[error("invalid square: {0:?}")]
    BadSquare(String),
    #[error("invalid promotion piece: {0:?}")]
    BadPromotion(char),
    #[error("illegal move: {0}")]
    Illegal(String),
}

pub fn move_to_lan(mv: Move) -> String {
    let mut s = String::new();
    s.push_str(&sq_to_coord(mv.from));
    s.push_str(&sq_to_coord(mv.to));
    if let Some(p) = mv.promo {
        let ch = match p {
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            _ => 'q',
        };
        s.push(ch);
    }
    s
}

/// Parses a move and matches it against the legal moves of `pos`, which is
/// the single source of truth for legality. The position is never mutated.
///
/// A promotion entered without a piece letter resolves to the queen variant
/// (first match in generation order).
pub fn parse_lan(pos: &Position, text: &str) -> Result<Move, ParseMoveError> {
    let t = text.trim();
    if !t.is_ascii() || (t.len() != 4 && t.len() != 5) {
        return Err(ParseMoveError::BadLength(t.to_string()));
    }

    let from =
        coord_to_sq(&t[0..2]).ok_or_else(|| ParseMoveError::BadSquare(t[0..2].to_string()))?;
    let to = coord_to_sq(&t[2..4]).ok_or_else(|| ParseMoveError::BadSquare(t[2..4].to_string()))?;
    let promo = match t.as_bytes().get(4) {
        None => None,
        Some(&b) => Some(match b.to_ascii_lowercase() as char {
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            other => return Err(ParseMoveError::BadPromotion(other)),
        }),
    };

    legal_moves(pos)
        .into_iter()
        .find(|m| m.from == from && m.to == to && (promo.is_none() || m.promo == promo))
        .ok_or_else(|| ParseMoveError::Illegal(t.to_string()))
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;

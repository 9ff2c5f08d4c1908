//! Material-based position evaluation

use chess_core::{Color, Evaluator, PieceKind, Position};

/// Plain material count.
///
/// Scores are centipawns from White's perspective per the [`Evaluator`]
/// contract. Kings carry no material value; mate scoring belongs to the
/// search, not the evaluator.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialEval;

impl Evaluator for MaterialEval {
    fn evaluate(&self, pos: &Position) -> i32 {
        let mut score = 0i32;

        for sq in 0..64u8 {
            if let Some(pc) = pos.piece_at(sq) {
                let v = piece_value(pc.kind);
                score += if pc.color == Color::White { v } else { -v };
            }
        }

        score
    }
}

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;

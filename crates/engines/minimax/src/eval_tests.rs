use super::*;

use chess_core::Position;

#[test]
fn startpos_is_balanced() {
    assert_eq!(MaterialEval.evaluate(&Position::startpos()), 0);
}

#[test]
fn missing_pieces_shift_the_score() {
    // Black is down the g8 knight, white is down the h2 pawn.
    let pos =
        Position::from_fen("rnbqkb1r/pppppppp/8/8/8/8/PPPPPPP1/RNBQKBNR w").unwrap();
    assert_eq!(MaterialEval.evaluate(&pos), 320 - 100);
}

#[test]
fn score_is_signed_from_whites_perspective() {
    // Black has an extra queen.
    let pos = Position::from_fen("3qk3/8/8/8/8/8/8/4K3 w").unwrap();
    assert_eq!(MaterialEval.evaluate(&pos), -900);
}

#[test]
fn kings_carry_no_material_value() {
    let pos = Position::from_fen("4k3/8/8/8/8/8/8/4K3 w").unwrap();
    assert_eq!(MaterialEval.evaluate(&pos), 0);
    assert_eq!(piece_value(PieceKind::King), 0);
}

use super::*;
use crate::board::Position;

#[test]
fn formats_plain_and_promotion_moves() {
    assert_eq!(move_to_lan(Move::new(12, 28)), "e2e4");
    assert_eq!(move_to_lan(Move::new(6, 21)), "g1f3");
    assert_eq!(
        move_to_lan(Move::promoting(48, 56, PieceKind::Knight)),
        "a7a8n"
    );
}

#[test]
fn parses_a_legal_move() {
    let pos = Position::startpos();
    let mv = parse_lan(&pos, "g1f3").unwrap();
    assert_eq!((mv.from, mv.to), (6, 21));
    assert_eq!(mv.promo, None);
}

#[test]
fn trims_surrounding_whitespace() {
    let pos = Position::startpos();
    assert!(parse_lan(&pos, " e2e4 ").is_ok());
}

#[test]
fn promotion_letter_is_case_insensitive_and_defaults_to_queen() {
    let pos = Position::from_fen("8/P7/8/8/8/8/8/K6k w").unwrap();
    assert_eq!(parse_lan(&pos, "a7a8").unwrap().promo, Some(PieceKind::Queen));
    assert_eq!(parse_lan(&pos, "a7a8R").unwrap().promo, Some(PieceKind::Rook));
    assert_eq!(parse_lan(&pos, "a7a8n").unwrap().promo, Some(PieceKind::Knight));
}

#[test]
fn rejects_malformed_input() {
    let pos = Position::startpos();
    assert!(matches!(
        parse_lan(&pos, "e2"),
        Err(ParseMoveError::BadLength(_))
    ));
    assert!(matches!(
        parse_lan(&pos, "e2e4e5"),
        Err(ParseMoveError::BadLength(_))
    ));
    assert!(matches!(
        parse_lan(&pos, "z9e4"),
        Err(ParseMoveError::BadSquare(_))
    ));
    assert!(matches!(
        parse_lan(&pos, "e2é4"),
        Err(ParseMoveError::BadLength(_))
    ));
    assert!(matches!(
        parse_lan(&pos, "e7e8x"),
        Err(ParseMoveError::BadPromotion('x'))
    ));
}

#[test]
fn rejects_well_formed_but_illegal_moves() {
    let pos = Position::startpos();
    // No pawn pattern reaches e5 from e2; e7 holds the opponent's pawn.
    assert!(matches!(
        parse_lan(&pos, "e2e5"),
        Err(ParseMoveError::Illegal(_))
    ));
    assert!(matches!(
        parse_lan(&pos, "e7e5"),
        Err(ParseMoveError::Illegal(_))
    ));
}

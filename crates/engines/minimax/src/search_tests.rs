use super::*;
use crate::eval::MaterialEval;
use chess_core::{Position, legal_moves};

fn search(fen: &str, depth: u8) -> (Option<Move>, i32) {
    let pos = Position::from_fen(fen).unwrap();
    let mut nodes = 0;
    pick_best_move(&pos, depth, &MaterialEval, &mut nodes)
}

#[test]
fn startpos_search_returns_a_legal_move() {
    let pos = Position::startpos();
    let mut nodes = 0;
    let (best, _) = pick_best_move(&pos, 3, &MaterialEval, &mut nodes);
    assert!(legal_moves(&pos).contains(&best.unwrap()));
    assert!(nodes > 0);
}

#[test]
fn depth_one_takes_the_hanging_queen() {
    let (best, score) = search("3q3k/8/8/8/8/8/8/3R3K w", 1);
    let mv = best.unwrap();
    assert_eq!((mv.from, mv.to), (3, 59)); // d1 takes d8
    assert_eq!(score, 500);
}

#[test]
fn finds_mate_in_one() {
    let (best, score) = search("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w", 2);
    let mv = best.unwrap();
    assert_eq!((mv.from, mv.to), (4, 60)); // Qe1e8 mate
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn deeper_search_still_prefers_the_faster_mate() {
    // With three plies to spare the mate in one must still win out over
    // any slower mate the extra depth can see.
    let (best, score) = search("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w", 4);
    let mv = best.unwrap();
    assert_eq!((mv.from, mv.to), (4, 60));
    assert_eq!(score, MATE_SCORE - 1);
}

#[test]
fn mated_position_returns_no_move() {
    // Scholar's mate: black is already mated.
    let (best, score) = search("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b", 3);
    assert_eq!(best, None);
    assert_eq!(score, -MATE_SCORE);
}

#[test]
fn stalemated_position_returns_a_draw_score() {
    let (best, score) = search("k7/2K5/1Q6/8/8/8/8/8 b", 3);
    assert_eq!(best, None);
    assert_eq!(score, 0);
}

#[test]
fn search_is_deterministic() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w";
    let a = search(fen, 3);
    let b = search(fen, 3);
    assert_eq!(a, b);
}

#[test]
#[should_panic(expected = "at least 1 ply")]
fn zero_depth_is_a_contract_violation() {
    let pos = Position::startpos();
    let mut nodes = 0;
    pick_best_move(&pos, 0, &MaterialEval, &mut nodes);
}

// =============================================================================
// Pruning correctness: alpha-beta must match exhaustive minimax
// =============================================================================

/// Plain negamax without pruning, the reference the pruned search must match.
fn negamax_plain(pos: &mut Position, depth: u8, ply: u8) -> i32 {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        return if pos.in_check(pos.side_to_move) {
            -(MATE_SCORE - ply as i32)
        } else {
            0
        };
    }
    if depth == 0 {
        let s = chess_core::Evaluator::evaluate(&MaterialEval, pos);
        return match pos.side_to_move {
            chess_core::Color::White => s,
            chess_core::Color::Black => -s,
        };
    }
    let mut best = -INF;
    for mv in moves {
        let undo = pos.make_move(mv);
        let score = -negamax_plain(pos, depth - 1, ply + 1);
        pos.unmake_move(mv, undo);
        if score > best {
            best = score;
        }
    }
    best
}

fn best_plain(fen: &str, depth: u8) -> (Option<Move>, i32) {
    let mut pos = Position::from_fen(fen).unwrap();
    let moves = legal_moves(&pos);
    let mut best = moves[0];
    let mut best_score = -INF;
    for mv in moves {
        let undo = pos.make_move(mv);
        let score = -negamax_plain(&mut pos, depth - 1, 1);
        pos.unmake_move(mv, undo);
        if score > best_score {
            best_score = score;
            best = mv;
        }
    }
    (Some(best), best_score)
}

#[test]
fn alpha_beta_matches_plain_minimax() {
    let fens = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R b",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w",
    ];
    for fen in fens {
        for depth in 1..=2 {
            assert_eq!(
                search(fen, depth),
                best_plain(fen, depth),
                "divergence at depth {depth} for {fen}"
            );
        }
    }
    // One deeper probe on the sparse endgame, where full minimax stays cheap.
    let endgame = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w";
    assert_eq!(search(endgame, 3), best_plain(endgame, 3));
}

use crate::{board::Position, movegen::legal_moves};

/// Terminal classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// The side to move has no legal moves and is in check; it has lost.
    Checkmate,
    /// The side to move has no legal moves and is not in check; draw.
    Stalemate,
}

/// Classifies the current position. Pure function of the position; callers
/// re-query after every applied move.
pub fn game_status(pos: &Position) -> GameStatus {
    if !legal_moves(pos).is_empty() {
        return GameStatus::Ongoing;
    }
    if pos.in_check(pos.side_to_move) {
        GameStatus::Checkmate
    } else {
        GameStatus::Stalemate
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod status_tests;

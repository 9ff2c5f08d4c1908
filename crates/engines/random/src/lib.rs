//! Random Move Chess Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful for:
//! - Exercising the engine seam with a second, trivial implementor
//! - Baseline comparisons (any real engine should easily beat this)
//! - Stress testing move generation

use chess_core::{Engine, Position, SearchResult, legal_moves};
use rand::seq::SliceRandom;
use rand::thread_rng;


/// A chess engine that plays random legal moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomEngine;

impl RandomEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, pos: &Position, _depth: u8) -> SearchResult {
        let moves = legal_moves(pos);
        let best_move = moves.choose(&mut thread_rng()).copied();

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: moves.len() as u64,
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

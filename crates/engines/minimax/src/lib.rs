//! Minimax Chess Engine
//!
//! Depth-limited negamax with alpha-beta pruning over a pluggable static
//! evaluator. Material evaluation is the default.

mod eval;
mod search;

use chess_core::{Engine, Evaluator, Position, SearchResult};

pub use eval::{MaterialEval, piece_value};
pub use search::{INF, MATE_SCORE, MATE_THRESHOLD, pick_best_move};

/// Chess engine using negamax search with alpha-beta pruning.
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
    evaluator: Box<dyn Evaluator>,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self::with_evaluator(Box::new(MaterialEval))
    }

    /// Substitutes a different static evaluator; the search is untouched.
    pub fn with_evaluator(evaluator: Box<dyn Evaluator>) -> Self {
        Self {
            nodes: 0,
            evaluator,
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, pos: &Position, depth: u8) -> SearchResult {
        self.nodes = 0;
        let (best_move, score) =
            pick_best_move(pos, depth, self.evaluator.as_ref(), &mut self.nodes);

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

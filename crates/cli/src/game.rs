//! Orchestration for a single game: the live position plus the moves that
//! produced it. Legality decisions are delegated entirely to the core; this
//! layer never re-derives them.

use chess_core::{
    Engine, GameStatus, Move, ParseMoveError, Position, SearchResult, game_status, parse_lan,
};

pub struct Game {
    pub position: Position,
    pub moves_played: Vec<Move>,
}

impl Game {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            moves_played: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        game_status(&self.position)
    }

    /// Parses and applies one human move. A rejected move, malformed or
    /// illegal, leaves the position untouched.
    pub fn try_apply(&mut self, text: &str) -> Result<Move, ParseMoveError> {
        let mv = parse_lan(&self.position, text)?;
        self.position.make_move(mv);
        self.moves_played.push(mv);
        Ok(mv)
    }

    /// Asks the engine for a reply and applies it, if one exists.
    pub fn engine_reply(&mut self, engine: &mut dyn Engine, depth: u8) -> SearchResult {
        let result = engine.search(&self.position, depth);
        if let Some(mv) = result.best_move {
            self.position.make_move(mv);
            self.moves_played.push(mv);
        }
        result
    }
}

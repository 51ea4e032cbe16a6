use caissa_core::{Board, Color, Move};

use crate::search::{best_move, DEFAULT_DEPTH};
use crate::Agent;

/// Fixed-depth minimax engine.
///
/// A pure function of the board it is handed: no state persists between
/// calls, so the same position always yields the same move.
pub struct MinimaxAgent {
    name: String,
    depth: u8,
}

impl MinimaxAgent {
    pub fn new(depth: u8) -> Self {
        MinimaxAgent {
            name: format!("Minimax(depth={})", depth),
            depth,
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn best_move(&mut self, board: &mut Board, side: Color) -> Option<Move> {
        best_move(board, side, self.depth)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

use caissa_core::{generate_side_moves, Board, Color, GameStateManager, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::Agent;

/// Baseline agent that plays a uniformly random legal move.
pub struct RandomAgent {
    name: String,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            name: "Random".to_string(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn best_move(&mut self, board: &mut Board, side: Color) -> Option<Move> {
        let rules = GameStateManager::new();
        let mut moves = generate_side_moves(board, side);
        moves.retain(|&mv| !rules.leaves_king_in_check(board, mv, side));

        let mut rng = thread_rng();
        moves.choose(&mut rng).copied()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

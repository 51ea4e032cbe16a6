pub mod evaluation;
pub mod minimax;
pub mod random;
pub mod search;

use caissa_core::{Board, Color, Move};

/// Core trait for move-selecting agents.
///
/// The board is taken mutably because engines explore by mutating it in
/// place and undoing; the board is unchanged when the call returns.
pub trait Agent {
    /// Get the best move for the given side, or None if it has no legal
    /// move (the caller classifies that as checkmate or stalemate).
    fn best_move(&mut self, board: &mut Board, side: Color) -> Option<Move>;

    /// Get the agent's name.
    fn name(&self) -> &str;
}

pub use evaluation::evaluate;
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::{best_move, DEFAULT_DEPTH};

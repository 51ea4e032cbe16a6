pub mod board;
pub mod game_state;
pub mod move_gen;
pub mod tables;
pub mod types;

pub use board::{Board, MoveRecord};
pub use game_state::{GameStateManager, GameStatus, MoveError};
pub use move_gen::{generate_moves, generate_side_moves};
pub use types::{Color, Move, Piece, PieceKind, Position};

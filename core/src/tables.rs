//! Static movement tables consumed by the move generator.
//!
//! Leaper offsets are single jumps; ray directions are unit steps that the
//! sliding helper repeats until it runs off the board or into a piece.

use crate::types::Color;

/// The eight knight jumps.
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

/// The eight single-square king steps.
pub const KING_STEPS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// The four straight rook rays.
pub const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// The four diagonal bishop rays.
pub const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// The eight queen rays: rook rays plus bishop rays.
pub const QUEEN_RAYS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const PAWN_CAPTURES_WHITE: [(i8, i8); 2] = [(1, -1), (1, 1)];
const PAWN_CAPTURES_BLACK: [(i8, i8); 2] = [(-1, -1), (-1, 1)];

/// Returns the two forward-diagonal capture offsets for pawns of a color.
pub const fn pawn_captures(color: Color) -> [(i8, i8); 2] {
    match color {
        Color::White => PAWN_CAPTURES_WHITE,
        Color::Black => PAWN_CAPTURES_BLACK,
    }
}

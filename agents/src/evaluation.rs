use caissa_core::{Board, Color, GameStateManager, PieceKind};

/// Swing applied per king whose side currently stands in check.
const CHECK_PENALTY: i32 = 500;

/// Evaluates a board as a signed material sum: positive favors white,
/// negative favors black, zero-sum from white's perspective.
///
/// On top of the material count, each king whose side is in check costs
/// its side a fixed penalty, so the search can tell apart otherwise equal
/// material balances.
pub fn evaluate(board: &Board) -> i32 {
    let rules = GameStateManager::new();
    let mut score = 0;

    for color in [Color::White, Color::Black] {
        let sign = match color {
            Color::White => 1,
            Color::Black => -1,
        };
        for piece in board.pieces(color) {
            score += sign * piece.kind.value();
            if piece.kind == PieceKind::King && rules.is_check(board, color) {
                score -= sign * CHECK_PENALTY;
            }
        }
    }

    score
}

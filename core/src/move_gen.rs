//! Per-piece move generation.
//!
//! Moves produced here are piece-legal: destinations are on the board and
//! never hold a friendly piece, sliding pieces stop at the first occupied
//! square, and the special pawn and castling rules are honored. Whether a
//! move leaves the mover's own king in check is the caller's concern
//! (`GameStateManager::leaves_king_in_check`).

use crate::board::Board;
use crate::tables;
use crate::types::{Color, Move, Piece, PieceKind, Position};

/// Generates the moves of the piece on `from`, freshly computed.
///
/// Returns an empty list for an empty or off-board square.
pub fn generate_moves(board: &Board, from: Position) -> Vec<Move> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, &piece, &mut moves),
        PieceKind::Knight => leaper_moves(board, &piece, &tables::KNIGHT_JUMPS, &mut moves),
        PieceKind::Bishop => sliding_moves(board, &piece, &tables::BISHOP_RAYS, &mut moves),
        PieceKind::Rook => sliding_moves(board, &piece, &tables::ROOK_RAYS, &mut moves),
        PieceKind::Queen => sliding_moves(board, &piece, &tables::QUEEN_RAYS, &mut moves),
        PieceKind::King => {
            leaper_moves(board, &piece, &tables::KING_STEPS, &mut moves);
            castling_moves(board, &piece, &mut moves);
        }
    }
    moves
}

/// Generates the moves of every piece of one color, scanning the board row
/// by row so the ordering is stable across calls.
pub fn generate_side_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for piece in board.pieces(color) {
        moves.extend(generate_moves(board, piece.pos));
    }
    moves
}

/// Walks each ray until it leaves the board or hits a piece; the first
/// enemy piece on a ray is a capture, a friendly piece ends the ray with
/// nothing added.
fn sliding_moves(board: &Board, piece: &Piece, rays: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(d_row, d_col) in rays {
        let mut target = piece.pos.offset(d_row, d_col);
        while board.is_valid(target) {
            if board.is_occupied(target) {
                if board.is_enemy(target, piece.color) {
                    moves.push(Move::new(piece.pos, target));
                }
                break;
            }
            moves.push(Move::new(piece.pos, target));
            target = target.offset(d_row, d_col);
        }
    }
}

/// Adds one move per offset whose target is on the board and not held by a
/// friendly piece; covers quiet moves and captures alike.
fn leaper_moves(board: &Board, piece: &Piece, offsets: &[(i8, i8)], moves: &mut Vec<Move>) {
    for &(d_row, d_col) in offsets {
        let target = piece.pos.offset(d_row, d_col);
        if board.is_valid(target)
            && (!board.is_occupied(target) || board.is_enemy(target, piece.color))
        {
            moves.push(Move::new(piece.pos, target));
        }
    }
}

fn pawn_moves(board: &Board, pawn: &Piece, moves: &mut Vec<Move>) {
    let direction = pawn.color.pawn_direction();

    // Quiet forward step.
    let forward = pawn.pos.offset(direction, 0);
    if board.is_valid(forward) && !board.is_occupied(forward) {
        moves.push(Move::new(pawn.pos, forward));
    }

    // Double step from the starting rank, both squares empty.
    if !pawn.has_moved && pawn.pos.row == pawn.color.pawn_start_row() {
        let double = pawn.pos.offset(2 * direction, 0);
        if board.is_valid(double) && !board.is_occupied(forward) && !board.is_occupied(double) {
            moves.push(Move::new(pawn.pos, double));
        }
    }

    // Diagonal captures.
    for &(d_row, d_col) in &tables::pawn_captures(pawn.color) {
        let target = pawn.pos.offset(d_row, d_col);
        if board.is_valid(target) && board.is_enemy(target, pawn.color) {
            moves.push(Move::new(pawn.pos, target));
        }
    }

    // En passant: an adjacent enemy pawn that just double-stepped can be
    // taken by landing on the square it skipped.
    for d_col in [-1, 1] {
        let beside = pawn.pos.offset(0, d_col);
        let Some(neighbor) = board.piece_at(beside) else {
            continue;
        };
        if neighbor.kind == PieceKind::Pawn
            && neighbor.color != pawn.color
            && neighbor.ep_capturable
        {
            let behind = beside.offset(direction, 0);
            if board.is_valid(behind) && !board.is_occupied(behind) {
                moves.push(Move::new(pawn.pos, behind));
            }
        }
    }
}

/// Castling generation: a never-moved king with an empty path to a
/// never-moved rook of its own color yields two entries, the king's
/// two-square move and the paired rook relocation.
///
/// Only the conditions above are checked here; ruling out castling while in
/// check is left to the self-check filtering done by callers.
fn castling_moves(board: &Board, king: &Piece, moves: &mut Vec<Move>) {
    if king.has_moved {
        return;
    }
    let row = king.pos.row;

    // King side: columns 5 and 6 clear, rook on column 7.
    if castle_path_clear(board, row, &[5, 6]) && unmoved_rook(board, king, 7) {
        moves.push(Move::new(king.pos, Position::new(row, 6)));
        moves.push(Move::new(Position::new(row, 7), Position::new(row, 5)));
    }

    // Queen side: columns 1 through 3 clear, rook on column 0.
    if castle_path_clear(board, row, &[1, 2, 3]) && unmoved_rook(board, king, 0) {
        moves.push(Move::new(king.pos, Position::new(row, 2)));
        moves.push(Move::new(Position::new(row, 0), Position::new(row, 3)));
    }
}

fn castle_path_clear(board: &Board, row: i8, cols: &[i8]) -> bool {
    cols.iter()
        .all(|&col| !board.is_occupied(Position::new(row, col)))
}

fn unmoved_rook(board: &Board, king: &Piece, col: i8) -> bool {
    board
        .piece_at(Position::new(king.pos.row, col))
        .map_or(false, |p| {
            p.kind == PieceKind::Rook && p.color == king.color && !p.has_moved
        })
}

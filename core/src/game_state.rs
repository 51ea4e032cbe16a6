use log::debug;
use thiserror::Error;

use crate::board::Board;
use crate::move_gen::{generate_moves, generate_side_moves};
use crate::types::{Color, Move, Piece, PieceKind, Position};

/// The derived state of one side's game, never stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GameStatus {
    Normal,
    Check,
    Checkmate,
    Stalemate,
}

/// Why a requested move was rejected by [`GameStateManager::try_play`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum MoveError {
    #[error("coordinates are off the board")]
    OffBoard,
    #[error("no piece on the source square")]
    EmptySource,
    #[error("destination holds a piece of the same color")]
    FriendlyOccupied,
    #[error("the piece cannot reach that square")]
    NotReachable,
    #[error("the move would leave the king in check")]
    SelfCheck,
}

/// Derives check, checkmate, and stalemate from a board.
///
/// Holds no state of its own; every query takes the board it analyzes, and
/// the simulating queries take it mutably because they apply each candidate
/// move and undo it before returning.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameStateManager;

impl GameStateManager {
    /// Creates a new manager.
    pub const fn new() -> Self {
        Self
    }

    /// Returns true if the given side's king is attacked.
    ///
    /// A board with no king for that side reports not-in-check; a
    /// well-formed game never reaches that state, but a partial setup may.
    pub fn is_check(&self, board: &Board, side: Color) -> bool {
        let Some(king) = board.king_position(side) else {
            debug!("no {side:?} king on the board, reporting not in check");
            return false;
        };
        self.is_square_attacked(board, king, side.opponent())
    }

    /// Returns true if any piece of `by` has a move ending on `target`.
    fn is_square_attacked(&self, board: &Board, target: Position, by: Color) -> bool {
        board
            .pieces(by)
            .any(|piece| generate_moves(board, piece.pos).iter().any(|m| m.to == target))
    }

    /// Simulates a move and reports whether it leaves the mover's own king
    /// in check. The board is restored before returning.
    pub fn leaves_king_in_check(&self, board: &mut Board, mv: Move, side: Color) -> bool {
        let Some(record) = board.apply(mv) else {
            // An inapplicable move cannot be an escape from anything.
            return true;
        };
        let in_check = self.is_check(board, side);
        board.undo(record);
        in_check
    }

    /// Returns true if some move of `side` does not leave its king in check.
    fn has_legal_move(&self, board: &mut Board, side: Color) -> bool {
        generate_side_moves(board, side)
            .into_iter()
            .any(|mv| !self.leaves_king_in_check(board, mv, side))
    }

    /// Returns true if the side is in check and no move escapes it.
    pub fn is_checkmate(&self, board: &mut Board, side: Color) -> bool {
        self.is_check(board, side) && !self.has_legal_move(board, side)
    }

    /// Returns true if the side is not in check but has no move that avoids
    /// putting its king in check.
    pub fn is_stalemate(&self, board: &mut Board, side: Color) -> bool {
        !self.is_check(board, side) && !self.has_legal_move(board, side)
    }

    /// Returns true if either side is checkmated or stalemated.
    pub fn is_game_over(&self, board: &mut Board) -> bool {
        self.is_checkmate(board, Color::White)
            || self.is_checkmate(board, Color::Black)
            || self.is_stalemate(board, Color::White)
            || self.is_stalemate(board, Color::Black)
    }

    /// Classifies the given side's situation.
    pub fn status(&self, board: &mut Board, side: Color) -> GameStatus {
        match (self.is_check(board, side), self.has_legal_move(board, side)) {
            (true, false) => GameStatus::Checkmate,
            (true, true) => GameStatus::Check,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Normal,
        }
    }

    /// Validates and executes one move on behalf of an external caller.
    ///
    /// The transition must be among the source piece's generated moves and
    /// must not leave the mover's king in check. A castling king move also
    /// relocates the paired rook. Returns the captured piece, if any.
    pub fn try_play(
        &self,
        board: &mut Board,
        from: Position,
        to: Position,
    ) -> Result<Option<Piece>, MoveError> {
        if !board.is_valid(from) || !board.is_valid(to) {
            return Err(MoveError::OffBoard);
        }
        let piece = board.piece_at(from).ok_or(MoveError::EmptySource)?;
        if board.piece_at(to).map_or(false, |p| p.color == piece.color) {
            return Err(MoveError::FriendlyOccupied);
        }

        let mv = Move::new(from, to);
        if !generate_moves(board, from).contains(&mv) {
            debug!("rejected {mv}: not reachable for {:?}", piece.kind);
            return Err(MoveError::NotReachable);
        }
        if self.leaves_king_in_check(board, mv, piece.color) {
            debug!("rejected {mv}: leaves the {:?} king in check", piece.color);
            return Err(MoveError::SelfCheck);
        }

        let record = board.apply(mv).ok_or(MoveError::EmptySource)?;
        let captured = record.captured_piece();

        // A castling king move carries its rook along.
        if piece.kind == PieceKind::King && (to.col - from.col).abs() == 2 {
            let (rook_from, rook_to) = if to.col == 6 {
                (Position::new(from.row, 7), Position::new(from.row, 5))
            } else {
                (Position::new(from.row, 0), Position::new(from.row, 3))
            };
            let _ = board.apply(Move::new(rook_from, rook_to));
        }

        debug!("played {mv}");
        Ok(captured)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn put(board: &mut Board, kind: PieceKind, color: Color, row: i8, col: i8) {
        let pos = Position::new(row, col);
        board.place(Piece::new(kind, color, pos), pos);
    }

    #[test]
    fn test_rook_gives_check() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::Rook, Color::Black, 7, 4);

        let rules = GameStateManager::new();
        assert!(rules.is_check(&board, Color::White));
        assert!(!rules.is_check(&board, Color::Black));
    }

    #[test]
    fn test_blocked_rook_gives_no_check() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::Pawn, Color::White, 3, 4);
        put(&mut board, PieceKind::Rook, Color::Black, 7, 4);

        assert!(!GameStateManager::new().is_check(&board, Color::White));
    }

    #[test]
    fn test_missing_king_reports_not_in_check() {
        let mut board = Board::new();
        put(&mut board, PieceKind::Rook, Color::Black, 7, 4);
        assert!(!GameStateManager::new().is_check(&board, Color::White));
    }

    #[test]
    fn test_leaves_king_in_check_detects_pins() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::Rook, Color::White, 2, 4);
        put(&mut board, PieceKind::Rook, Color::Black, 7, 4);
        let before = board.clone();

        let rules = GameStateManager::new();
        // Moving the pinned rook off the file exposes the king.
        let sideways = Move::new(Position::new(2, 4), Position::new(2, 0));
        assert!(rules.leaves_king_in_check(&mut board, sideways, Color::White));
        // Sliding up the file keeps the king covered.
        let up_file = Move::new(Position::new(2, 4), Position::new(5, 4));
        assert!(!rules.leaves_king_in_check(&mut board, up_file, Color::White));
        // Simulation leaves no trace either way.
        assert_eq!(board, before);
    }

    #[test]
    fn test_back_rank_checkmate() {
        // Cornered king, own pawns sealing the second row, enemy rook on
        // the back rank.
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 0);
        put(&mut board, PieceKind::Pawn, Color::White, 1, 0);
        put(&mut board, PieceKind::Pawn, Color::White, 1, 1);
        put(&mut board, PieceKind::Rook, Color::Black, 0, 7);
        put(&mut board, PieceKind::King, Color::Black, 7, 7);

        let rules = GameStateManager::new();
        assert!(rules.is_check(&mut board, Color::White));
        assert!(rules.is_checkmate(&mut board, Color::White));
        assert!(!rules.is_stalemate(&mut board, Color::White));
        assert!(rules.is_game_over(&mut board));
        assert_eq!(rules.status(&mut board, Color::White), GameStatus::Checkmate);
    }

    #[test]
    fn test_check_with_escape_is_not_mate() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::Rook, Color::Black, 7, 4);
        put(&mut board, PieceKind::King, Color::Black, 7, 7);

        let rules = GameStateManager::new();
        assert!(rules.is_check(&mut board, Color::White));
        assert!(!rules.is_checkmate(&mut board, Color::White));
        assert_eq!(rules.status(&mut board, Color::White), GameStatus::Check);
    }

    #[test]
    fn test_cornered_king_stalemate() {
        // Classic queen stalemate: the lone king has no safe square but is
        // not attacked.
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 0);
        put(&mut board, PieceKind::Queen, Color::Black, 1, 2);
        put(&mut board, PieceKind::King, Color::Black, 7, 7);

        let rules = GameStateManager::new();
        assert!(!rules.is_check(&mut board, Color::White));
        assert!(rules.is_stalemate(&mut board, Color::White));
        assert!(!rules.is_checkmate(&mut board, Color::White));
        assert!(rules.is_game_over(&mut board));
        assert_eq!(rules.status(&mut board, Color::White), GameStatus::Stalemate);
    }

    #[test]
    fn test_lone_kings_are_quiet() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::King, Color::Black, 7, 4);

        let rules = GameStateManager::new();
        for side in [Color::White, Color::Black] {
            assert!(!rules.is_check(&mut board, side));
            assert!(!rules.is_checkmate(&mut board, side));
            assert!(!rules.is_stalemate(&mut board, side));
            assert_eq!(rules.status(&mut board, side), GameStatus::Normal);
        }
        assert!(!rules.is_game_over(&mut board));
    }

    #[test]
    fn test_try_play_rejections() {
        let mut board = Board::new();
        put(&mut board, PieceKind::Rook, Color::White, 0, 0);
        put(&mut board, PieceKind::Pawn, Color::White, 0, 3);
        let rules = GameStateManager::new();

        assert_eq!(
            rules.try_play(&mut board, Position::new(0, 0), Position::new(0, 8)),
            Err(MoveError::OffBoard)
        );
        assert_eq!(
            rules.try_play(&mut board, Position::new(4, 4), Position::new(5, 4)),
            Err(MoveError::EmptySource)
        );
        assert_eq!(
            rules.try_play(&mut board, Position::new(0, 0), Position::new(0, 3)),
            Err(MoveError::FriendlyOccupied)
        );
        assert_eq!(
            rules.try_play(&mut board, Position::new(0, 0), Position::new(5, 5)),
            Err(MoveError::NotReachable)
        );
    }

    #[test]
    fn test_try_play_rejects_self_check() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::Rook, Color::White, 2, 4);
        put(&mut board, PieceKind::Rook, Color::Black, 7, 4);

        let rules = GameStateManager::new();
        assert_eq!(
            rules.try_play(&mut board, Position::new(2, 4), Position::new(2, 7)),
            Err(MoveError::SelfCheck)
        );
        // The pinned rook may still slide toward the attacker.
        assert_eq!(
            rules.try_play(&mut board, Position::new(2, 4), Position::new(6, 4)),
            Ok(None)
        );
    }

    #[test]
    fn test_try_play_returns_captured_piece() {
        let mut board = Board::new();
        put(&mut board, PieceKind::Rook, Color::White, 0, 0);
        put(&mut board, PieceKind::Knight, Color::Black, 0, 5);

        let captured = GameStateManager::new()
            .try_play(&mut board, Position::new(0, 0), Position::new(0, 5))
            .unwrap();
        assert_eq!(captured.unwrap().kind, PieceKind::Knight);
    }

    #[test]
    fn test_try_play_castles_with_rook() {
        let mut board = Board::new();
        put(&mut board, PieceKind::King, Color::White, 0, 4);
        put(&mut board, PieceKind::Rook, Color::White, 0, 7);

        let rules = GameStateManager::new();
        assert_eq!(
            rules.try_play(&mut board, Position::new(0, 4), Position::new(0, 6)),
            Ok(None)
        );
        assert_eq!(
            board.piece_at(Position::new(0, 6)).unwrap().kind,
            PieceKind::King
        );
        let rook = board.piece_at(Position::new(0, 5)).unwrap();
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(!board.is_occupied(Position::new(0, 7)));
    }
}

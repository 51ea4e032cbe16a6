use std::fmt;

/// Represents one of the two players in chess.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color.
    pub const fn opponent(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Returns the direction pawns of this color advance, as a row delta.
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Returns the row pawns of this color start on.
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Returns the row on which pawns of this color promote.
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// The six kinds of chess pieces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Returns the material value of this piece kind.
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

/// A board coordinate as (row, column).
///
/// The type itself does not restrict the range; arithmetic may step off the
/// board and `Board::is_valid` is where out-of-range coordinates get
/// rejected. Two positions are equal when both coordinates are equal.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Creates a new position.
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Returns this position shifted by the given deltas, unchecked.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A chess piece: kind, color, current square, and the mutable state the
/// special rules depend on.
///
/// `pos` always matches the grid coordinate the piece is stored at
/// immediately after any placement call returns. `has_moved` matters for
/// castling (King, Rook) and the pawn double-step; `ep_capturable` is set
/// only on a pawn that just advanced two squares.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub pos: Position,
    pub has_moved: bool,
    pub ep_capturable: bool,
}

impl Piece {
    /// Creates a new piece that has not moved yet.
    pub const fn new(kind: PieceKind, color: Color, pos: Position) -> Self {
        Self {
            kind,
            color,
            pos,
            has_moved: false,
            ep_capturable: false,
        }
    }
}

/// A move from one square to another.
///
/// Transient: a move is compared and replayed but never stored past the
/// search ply or caller action that produced it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Creates a new move.
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

use std::fmt;

use super::{Color, GameStatus, MoveRecord, Piece, Square};

/// Back rank layout shared by both colors, file a to file h.
pub(crate) const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// The 8x8 grid plus the cached king square of each color.
///
/// `kings[c]` always names the square holding `c`'s king; every mutation
/// goes through `set_piece`, `clear_square` or make/unmake, which keep it
/// current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [[Option<(Color, Piece)>; 8]; 8],
    pub(crate) kings: [Square; 2],
}

impl Board {
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (col, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, col), Color::Black, *piece);
            board.set_piece(Square(1, col), Color::Black, Piece::Pawn);
            board.set_piece(Square(6, col), Color::White, Piece::Pawn);
            board.set_piece(Square(7, col), Color::White, *piece);
        }
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
            kings: [
                Square(Color::White.back_row(), 4),
                Square(Color::Black.back_row(), 4),
            ],
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
        if piece == Piece::King {
            self.kings[color.index()] = sq;
        }
    }

    pub(crate) fn clear_square(&mut self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1].take()
    }

    /// Occupant of a square; `None` for empty or off-board squares.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !sq.is_valid() {
            return None;
        }
        self.squares[sq.0][sq.1]
    }

    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Get just the piece kind on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    /// Cached king square for `color`.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Locate `color`'s king by scanning the grid, ignoring the cache.
    #[must_use]
    pub fn find_king(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// Every occupied square with its occupant, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|(c, p)| (sq, c, p)))
    }

    #[must_use]
    pub fn count(&self, color: Color, piece: Piece) -> usize {
        self.pieces()
            .filter(|&(_, c, p)| c == color && p == piece)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

/// A game in progress: position, side to move, capture history and status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    /// Pieces taken by each color, in capture order.
    pub(crate) captured: [Vec<(Color, Piece)>; 2],
    pub(crate) status: GameStatus,
    /// Moves applied so far, so `undo` only accepts the latest one.
    pub(crate) applied: Vec<MoveRecord>,
}

impl GameState {
    /// Standard starting position, White to move.
    pub fn new() -> Self {
        GameState {
            board: Board::new(),
            side_to_move: Color::White,
            captured: [Vec::new(), Vec::new()],
            status: GameStatus::Ongoing,
            applied: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn current_player(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.board.piece_at(sq)
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.board.king_square(color)
    }

    /// Pieces `color` has captured so far; each keeps its own color.
    #[must_use]
    pub fn captured(&self, color: Color) -> &[(Color, Piece)] {
        &self.captured[color.index()]
    }

    pub(crate) fn switch_player(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8 {
                let c = match self.board.piece_at(Square(row, col)) {
                    Some((color, piece)) => piece.to_letter(color),
                    None => '.',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(f, "{} to move ({})", self.side_to_move, self.status)
    }
}

//! Fluent builder for constructing game positions.
//!
//! Allows composing positions piece by piece, e.g. for endgame fixtures.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, GameStatus, Piece, Square};
//!
//! let game = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, Piece::King)
//!     .piece(Square(0, 4), Color::Black, Piece::Rook)
//!     .piece(Square(0, 0), Color::Black, Piece::King)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(game.status(), GameStatus::Check);
//! ```

use super::state::BACK_RANK;
use super::{Board, BuildError, Color, GameState, Piece, Square};

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for (col, &piece) in BACK_RANK.iter().enumerate() {
            builder.pieces.push((Square(0, col), Color::Black, piece));
            builder.pieces.push((Square(7, col), Color::White, piece));
        }
        for col in 0..8 {
            builder.pieces.push((Square(1, col), Color::Black, Piece::Pawn));
            builder.pieces.push((Square(6, col), Color::White, Piece::Pawn));
        }
        builder
    }

    /// Place a piece on the board, replacing any previous occupant.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the game.
    ///
    /// Requires exactly one king per color and rejects positions where the
    /// side that just moved is left in check. The returned state already
    /// carries its classification, so a mate or stalemate fixture is born
    /// finished.
    pub fn build(self) -> Result<GameState, BuildError> {
        let mut board = Board::empty();

        for (square, color, piece) in self.pieces {
            if !square.is_valid() {
                return Err(BuildError::InvalidSquare { square });
            }
            board.set_piece(square, color, piece);
        }

        for color in Color::BOTH {
            match board.count(color, Piece::King) {
                0 => return Err(BuildError::MissingKing { color }),
                1 => {}
                _ => return Err(BuildError::ExtraKing { color }),
            }
        }

        let waiting = self.side_to_move.opponent();
        if board.is_in_check(waiting) {
            return Err(BuildError::WaitingSideInCheck { color: waiting });
        }

        let status = board.classify(self.side_to_move);
        Ok(GameState {
            board,
            side_to_move: self.side_to_move,
            captured: [Vec::new(), Vec::new()],
            status,
            applied: Vec::new(),
        })
    }
}

//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `scenarios.rs` - Check, checkmate and stalemate fixtures
//! - `make_unmake.rs` - Apply/undo correctness and capture bookkeeping
//! - `edge_cases.rs` - Rule gaps and boundary inputs
//! - `proptest.rs` - Property-based tests

use crate::board::{Board, Color, Piece, Square};

mod edge_cases;
mod proptest;

/// Board with the given pieces and nothing else.
pub(crate) fn board_with(pieces: &[(Square, Color, Piece)]) -> Board {
    let mut board = Board::empty();
    for &(sq, color, piece) in pieces {
        board.set_piece(sq, color, piece);
    }
    board
}

/// Swap colors and mirror rows, so White's view becomes Black's.
pub(crate) fn mirrored(board: &Board) -> Board {
    let mut mirror = Board::empty();
    for (sq, color, piece) in board.pieces() {
        mirror.set_piece(sq.flip_vertical(), color.opponent(), piece);
    }
    mirror
}

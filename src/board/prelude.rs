//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    new_game, reset, Board, BoardBuilder, Color, GameState, GameStatus, MoveRecord, Piece,
    Rejected, Square, SquareError, Target,
};

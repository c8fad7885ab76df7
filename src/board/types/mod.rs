//! Core chess types.
//!
//! This module contains the fundamental value types used by the rules engine:
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (row, column) board coordinate
//! - `MoveRecord`, `GameStatus` and `Target` - results handed to callers

mod moves;
mod piece;
mod square;

pub use moves::{GameStatus, MoveRecord, Target};
pub use piece::{Color, Piece};
pub use square::Square;

//! Board representation and the two-player rules engine.
//!
//! An 8x8 grid of optional pieces with a cached king square per color.
//! Implements the reduced rule set the engine was built for: no castling,
//! no en passant and no pawn promotion.
//!
//! # Example
//! ```
//! use chess_rules::board::{new_game, Color, GameStatus, Square};
//!
//! let mut game = new_game();
//! let record = game.attempt_move(Square(6, 4), Square(4, 4)).unwrap();
//! assert_eq!(record.status, GameStatus::Ongoing);
//! assert_eq!(game.current_player(), Color::Black);
//! ```

mod builder;
mod check;
mod error;
mod game;
mod make_unmake;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::BoardBuilder;
pub use error::{BuildError, MoveParseError, Rejected, SquareError};
pub use game::{new_game, reset};
pub use state::{Board, GameState};
pub use types::{Color, GameStatus, MoveRecord, Piece, Square, Target};

pub mod board;
pub mod protocol;
pub mod sync;

pub use board::{Color, GameState, GameStatus, MoveRecord, Piece, Rejected, Square};
pub use sync::{Session, SyncMessage};

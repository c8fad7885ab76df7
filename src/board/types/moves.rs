//! Move records and game status.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Square};

/// Classification of a position for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    /// Checkmate and stalemate end the game.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }

    /// Winner of a finished game, if it was decided by mate.
    #[must_use]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Check => write!(f, "check"),
            GameStatus::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            GameStatus::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// An accepted move, as handed back to the caller and relayed to a peer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    pub moved: (Color, Piece),
    pub captured: Option<(Color, Piece)>,
    /// Status of the position for the side now to move.
    pub status: GameStatus,
}

impl MoveRecord {
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Color that made the move.
    #[inline]
    #[must_use]
    pub const fn mover(&self) -> Color {
        self.moved.0
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A legal destination, split the way a front end highlights it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Quiet(Square),
    Capture(Square),
}

impl Target {
    #[inline]
    #[must_use]
    pub const fn square(self) -> Square {
        match self {
            Target::Quiet(sq) | Target::Capture(sq) => sq,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self, Target::Capture(_))
    }
}

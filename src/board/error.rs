//! Error types for rules engine operations.

use std::fmt;

use super::{Color, GameStatus, Square};

/// Why a move request was refused. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    /// Shape rule violated, friendly-fire capture, or the move leaves the
    /// mover's own king attacked
    IllegalMove { from: Square, to: Square },
    /// The game already ended in checkmate or stalemate
    GameAlreadyOver { status: GameStatus },
    /// A coordinate lies outside the 8x8 board
    InvalidSquare { square: Square },
    /// A seated session tried to move while the opponent is to play
    NotYourTurn { seat: Color },
    /// A replayed remote move does not reproduce the peer's record
    Desync { from: Square, to: Square },
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::IllegalMove { from, to } => write!(f, "Illegal move {from}{to}"),
            Rejected::GameAlreadyOver { status } => {
                write!(f, "Game is already over ({status})")
            }
            Rejected::InvalidSquare { square } => {
                write!(f, "Square {square} is off the board")
            }
            Rejected::NotYourTurn { seat } => write!(f, "Not {seat}'s turn"),
            Rejected::Desync { from, to } => {
                write!(f, "Remote move {from}{to} does not match the local position")
            }
        }
    }
}

impl std::error::Error for Rejected {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColumnOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColumnOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for `BoardBuilder::build`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildError {
    /// A piece was placed off the board
    InvalidSquare { square: Square },
    /// No king of this color was placed
    MissingKing { color: Color },
    /// More than one king of this color was placed
    ExtraKing { color: Color },
    /// The side not on move is in check, so its king could be captured
    WaitingSideInCheck { color: Color },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::InvalidSquare { square } => {
                write!(f, "Piece placed off the board at {square}")
            }
            BuildError::MissingKing { color } => write!(f, "{color} has no king"),
            BuildError::ExtraKing { color } => write!(f, "{color} has more than one king"),
            BuildError::WaitingSideInCheck { color } => {
                write!(f, "{color} is in check but not on move")
            }
        }
    }
}

impl std::error::Error for BuildError {}

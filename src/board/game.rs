//! Engine entry points: validate, apply, switch turn, classify.
//!
//! Local and remote moves go through the same path, so a malformed peer
//! payload is rejected exactly like a bad click and never touches state.

use super::{Color, GameState, MoveRecord, Piece, Rejected, Square, Target};

/// A fresh game in the standard starting position.
#[must_use]
pub fn new_game() -> GameState {
    GameState::new()
}

/// Discard everything and start over.
#[must_use]
pub fn reset() -> GameState {
    GameState::new()
}

impl GameState {
    /// Squares the piece on `from` may move to right now.
    ///
    /// Empty when the game is over, `from` is off the board, or it does not
    /// hold a piece of the side to move.
    pub fn legal_destinations(&mut self, from: Square) -> Vec<Square> {
        if self.is_over() || !from.is_valid() {
            return Vec::new();
        }
        self.board.legal_destinations(from, self.side_to_move)
    }

    /// Like `legal_destinations`, with captures told apart from quiet moves.
    pub fn legal_targets(&mut self, from: Square) -> Vec<Target> {
        if self.is_over() || !from.is_valid() {
            return Vec::new();
        }
        self.board.legal_targets(from, self.side_to_move)
    }

    /// Every legal `(from, to)` pair for the side to move.
    pub fn legal_moves(&mut self) -> Vec<(Square, Square)> {
        if self.is_over() {
            return Vec::new();
        }
        self.board.legal_moves(self.side_to_move)
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board.is_in_check(color)
    }

    /// Validate and play a move for the side to move.
    pub fn attempt_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, Rejected> {
        let moved = self.validate(from, to)?;
        Ok(self.commit(from, to, moved))
    }

    /// Replay a move received from the peer; validated exactly like a local one.
    pub fn apply_remote_move(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<MoveRecord, Rejected> {
        let moved = self.validate(from, to).inspect_err(|_err| {
            #[cfg(feature = "logging")]
            log::warn!("rejected remote move {from}{to}: {_err}");
        })?;
        Ok(self.commit(from, to, moved))
    }

    /// Return to the starting position with no captures and no result.
    pub fn reset(&mut self) {
        *self = GameState::new();

        #[cfg(feature = "logging")]
        log::debug!("game reset");
    }

    fn validate(&mut self, from: Square, to: Square) -> Result<(Color, Piece), Rejected> {
        if self.status.is_terminal() {
            return Err(Rejected::GameAlreadyOver {
                status: self.status,
            });
        }
        for square in [from, to] {
            if !square.is_valid() {
                return Err(Rejected::InvalidSquare { square });
            }
        }

        let illegal = Rejected::IllegalMove { from, to };
        if !self.board.is_legal_move(from, to, self.side_to_move) {
            #[cfg(feature = "logging")]
            log::debug!("illegal move {from}{to} for {}", self.side_to_move);
            return Err(illegal);
        }
        self.board.piece_at(from).ok_or(illegal)
    }

    fn commit(&mut self, from: Square, to: Square, moved: (Color, Piece)) -> MoveRecord {
        let info = self.board.make_move(from, to, moved);
        if let Some(captured) = info.captured {
            self.captured[moved.0.index()].push(captured);
        }
        self.switch_player();
        self.status = self.board.classify(self.side_to_move);

        #[cfg(feature = "logging")]
        log::debug!("{} {} {from}{to} -> {}", moved.0, moved.1, self.status);

        let record = MoveRecord {
            from,
            to,
            moved,
            captured: info.captured,
            status: self.status,
        };
        self.applied.push(record);
        record
    }
}

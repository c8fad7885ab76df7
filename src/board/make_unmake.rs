use std::ops::Deref;

use super::{Board, Color, GameState, MoveRecord, Piece, Rejected, Square};

/// Everything a move overwrites, enough to take it back exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) previous_king: Square,
}

/// A move played on the board for inspection only.
///
/// Derefs to the board in its post-move state; dropping the guard restores
/// the two touched squares and the king cache, whatever path the caller
/// leaves by.
pub(crate) struct SimulatedMove<'a> {
    board: &'a mut Board,
    info: UnmakeInfo,
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        self.board.unmake_move(self.info);
    }
}

impl Board {
    /// Relocate `moved` from `from` to `to`, replacing any occupant of `to`.
    ///
    /// The caller guarantees `moved` is the piece standing on `from`.
    pub(crate) fn make_move(
        &mut self,
        from: Square,
        to: Square,
        moved: (Color, Piece),
    ) -> UnmakeInfo {
        let (color, piece) = moved;
        let info = UnmakeInfo {
            from,
            to,
            moved,
            captured: self.piece_at(to),
            previous_king: self.king_square(color),
        };

        self.clear_square(from);
        self.squares[to.0][to.1] = Some(moved);
        if piece == Piece::King {
            self.kings[color.index()] = to;
        }
        info
    }

    pub(crate) fn unmake_move(&mut self, info: UnmakeInfo) {
        let (color, _) = info.moved;
        self.squares[info.from.0][info.from.1] = Some(info.moved);
        self.squares[info.to.0][info.to.1] = info.captured;
        self.kings[color.index()] = info.previous_king;
    }

    pub(crate) fn simulate(
        &mut self,
        from: Square,
        to: Square,
        moved: (Color, Piece),
    ) -> SimulatedMove<'_> {
        let info = self.make_move(from, to, moved);
        SimulatedMove { board: self, info }
    }

    /// Would playing `moved` from `from` to `to` leave its own king attacked?
    pub(crate) fn leaves_king_in_check(
        &mut self,
        from: Square,
        to: Square,
        moved: (Color, Piece),
    ) -> bool {
        self.simulate(from, to, moved).is_in_check(moved.0)
    }
}

impl GameState {
    /// Take back `record`, which must be the last move applied to this game.
    ///
    /// Restores the board, the capture list, the king cache and the side to
    /// move, then reclassifies the position. Works on finished games too.
    pub fn undo(&mut self, record: &MoveRecord) -> Result<(), Rejected> {
        let mismatch = Rejected::IllegalMove {
            from: record.from,
            to: record.to,
        };
        if self.applied.last() != Some(record) {
            return Err(mismatch);
        }
        self.applied.pop();

        let mover = record.mover();
        if record.captured.is_some() {
            self.captured[mover.index()].pop();
        }
        self.board.clear_square(record.to);
        self.board.set_piece(record.from, mover, record.moved.1);
        if let Some((color, piece)) = record.captured {
            self.board.set_piece(record.to, color, piece);
        }
        self.side_to_move = mover;
        self.status = self.board.classify(mover);

        #[cfg(feature = "logging")]
        log::debug!("took back {record}, {mover} to move");

        Ok(())
    }
}

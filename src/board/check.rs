//! Check detection and terminal classification.

use super::{Board, Color, GameStatus, Square};

impl Board {
    /// True iff some opposing piece could move onto `color`'s king square.
    ///
    /// Uses shape rules only, so an attacker that is itself pinned still
    /// gives check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        let king = self.king_square(color);
        let opponent = color.opponent();
        Square::all().any(|sq| self.color_on(sq) == Some(opponent) && self.shape_allows(sq, king))
    }

    /// Classify the position for `to_move`. Leaves the board as it found it.
    pub fn classify(&mut self, to_move: Color) -> GameStatus {
        let in_check = self.is_in_check(to_move);
        let has_moves = self.has_legal_move(to_move);

        match (in_check, has_moves) {
            (true, false) => GameStatus::Checkmate {
                winner: to_move.opponent(),
            },
            (true, true) => GameStatus::Check,
            (false, false) => GameStatus::Stalemate,
            (false, true) => GameStatus::Ongoing,
        }
    }
}

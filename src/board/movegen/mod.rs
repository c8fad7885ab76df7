//! Per-piece movement rules and legal move enumeration.
//!
//! Shape rules are pure geometry plus occupancy. Legality adds ownership,
//! friendly-fire and self-check tests on top of them.

mod kings;
mod knights;
mod pawns;
mod sliders;

use kings::king_shape;
use knights::knight_shape;

use super::{Board, Color, Piece, Square, Target};

impl Board {
    /// Geometric movement test for the piece on `from`, ignoring check.
    pub(crate) fn shape_allows(&self, from: Square, to: Square) -> bool {
        let Some((color, piece)) = self.piece_at(from) else {
            return false;
        };
        if from == to || !to.is_valid() {
            return false;
        }

        match piece {
            Piece::Pawn => self.pawn_shape(from, to, color),
            Piece::Knight => knight_shape(from, to),
            Piece::Bishop => self.bishop_shape(from, to),
            Piece::Rook => self.rook_shape(from, to),
            Piece::Queen => self.rook_shape(from, to) || self.bishop_shape(from, to),
            Piece::King => king_shape(from, to),
        }
    }

    /// Full legality of `from -> to` for `mover`.
    ///
    /// Off-board squares, an empty or foreign origin, a friendly destination,
    /// a shape violation or a self-check all make the move illegal. The
    /// self-check test plays the move on the board and takes it back before
    /// returning.
    pub fn is_legal_move(&mut self, from: Square, to: Square, mover: Color) -> bool {
        if !from.is_valid() || !to.is_valid() {
            return false;
        }
        let Some(moved) = self.piece_at(from) else {
            return false;
        };
        if moved.0 != mover || self.color_on(to) == Some(mover) {
            return false;
        }
        if !self.shape_allows(from, to) {
            return false;
        }
        !self.leaves_king_in_check(from, to, moved)
    }

    /// Every square the piece on `from` may legally reach for `mover`.
    pub fn legal_destinations(&mut self, from: Square, mover: Color) -> Vec<Square> {
        if self.color_on(from) != Some(mover) {
            return Vec::new();
        }
        Square::all()
            .filter(|&to| self.is_legal_move(from, to, mover))
            .collect()
    }

    /// Legal destinations split into quiet moves and captures.
    pub fn legal_targets(&mut self, from: Square, mover: Color) -> Vec<Target> {
        self.legal_destinations(from, mover)
            .into_iter()
            .map(|to| {
                if self.is_empty(to) {
                    Target::Quiet(to)
                } else {
                    Target::Capture(to)
                }
            })
            .collect()
    }

    /// All legal `(from, to)` pairs for `mover`.
    pub fn legal_moves(&mut self, mover: Color) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        for from in Square::all() {
            if self.color_on(from) != Some(mover) {
                continue;
            }
            for to in self.legal_destinations(from, mover) {
                moves.push((from, to));
            }
        }
        moves
    }

    /// Whether `mover` has at least one legal move; stops at the first one.
    pub fn has_legal_move(&mut self, mover: Color) -> bool {
        for from in Square::all() {
            if self.color_on(from) != Some(mover) {
                continue;
            }
            for to in Square::all() {
                if self.is_legal_move(from, to, mover) {
                    return true;
                }
            }
        }
        false
    }
}

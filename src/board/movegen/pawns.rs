use super::super::{Board, Color, Square};

impl Board {
    /// Pawn geometry: forward pushes onto empty squares, diagonal steps only
    /// onto an enemy piece.
    pub(crate) fn pawn_shape(&self, from: Square, to: Square, color: Color) -> bool {
        let dir = color.pawn_direction();
        let d_row = to.0 as isize - from.0 as isize;
        let d_col = to.1 as isize - from.1 as isize;

        match (d_row, d_col.abs()) {
            (r, 0) if r == dir => self.is_empty(to),
            (r, 0) if r == 2 * dir => {
                from.0 == color.pawn_start_row()
                    && from
                        .offset(dir, 0)
                        .is_some_and(|step| self.is_empty(step))
                    && self.is_empty(to)
            }
            (r, 1) if r == dir => self.color_on(to) == Some(color.opponent()),
            _ => false,
        }
    }
}

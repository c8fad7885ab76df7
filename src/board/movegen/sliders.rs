use super::super::{Board, Square};

impl Board {
    /// True when every square strictly between `from` and `to` is empty.
    ///
    /// The two squares must share a row, a column or a diagonal.
    pub(crate) fn path_clear(&self, from: Square, to: Square) -> bool {
        let d_row = (to.0 as isize - from.0 as isize).signum();
        let d_col = (to.1 as isize - from.1 as isize).signum();

        let mut current = from.offset(d_row, d_col);
        while let Some(sq) = current {
            if sq == to {
                return true;
            }
            if !self.is_empty(sq) {
                return false;
            }
            current = sq.offset(d_row, d_col);
        }
        false
    }

    pub(crate) fn rook_shape(&self, from: Square, to: Square) -> bool {
        (from.0 == to.0 || from.1 == to.1) && self.path_clear(from, to)
    }

    pub(crate) fn bishop_shape(&self, from: Square, to: Square) -> bool {
        from.0.abs_diff(to.0) == from.1.abs_diff(to.1) && self.path_clear(from, to)
    }
}

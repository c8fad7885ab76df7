use super::super::Square;

/// Knight jumps: an L of (2,1) or (1,2), never blocked.
pub(crate) fn knight_shape(from: Square, to: Square) -> bool {
    let d_row = from.0.abs_diff(to.0);
    let d_col = from.1.abs_diff(to.1);
    matches!((d_row, d_col), (2, 1) | (1, 2))
}

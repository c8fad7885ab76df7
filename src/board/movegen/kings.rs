use super::super::Square;

/// One step in any of the eight directions.
pub(crate) fn king_shape(from: Square, to: Square) -> bool {
    let d_row = from.0.abs_diff(to.0);
    let d_col = from.1.abs_diff(to.1);
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

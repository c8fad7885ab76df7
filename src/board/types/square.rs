//! Square type and coordinate conversions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, column).
///
/// Row 0 is Black's back rank (rank 8), row 7 is White's (rank 1).
/// Column 0 is file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True when both coordinates lie on the board.
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Mirror the square across the horizontal midline (row 0 <-> row 7).
    /// Off-board rows stay off the board.
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(7usize.wrapping_sub(self.0), self.1)
    }

    /// Step by a (row, col) delta, or `None` when that leaves the board.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.0 as isize + d_row;
        let col = self.1 as isize + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square(row as usize, col as usize))
        } else {
            None
        }
    }

    /// Get the square's index (0-63, row-major from (0,0))
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return write!(f, "({},{})", self.0, self.1);
        }
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.0, self.1).cmp(&(other.0, other.1))
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColumnOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };

        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let col = match file {
            'a'..='h' => file as usize - 'a' as usize,
            _ => return Err(invalid()),
        };
        let row = match rank {
            '1'..='8' => 8 - (rank as usize - '0' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_display() {
        assert_eq!(Square(7, 4).to_string(), "e1");
        assert_eq!(Square(0, 4).to_string(), "e8");
        assert_eq!(Square(6, 4).to_string(), "e2");
        assert_eq!(Square(0, 0).to_string(), "a8");
        assert_eq!(Square(7, 7).to_string(), "h1");
    }

    #[test]
    fn test_invalid_square_display_does_not_panic() {
        assert_eq!(Square(9, 2).to_string(), "(9,2)");
    }

    #[test]
    fn test_parse_algebraic() {
        assert_eq!("e2".parse::<Square>().unwrap(), Square(6, 4));
        assert_eq!("a8".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!("h1".parse::<Square>().unwrap(), Square(7, 7));
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a0".parse::<Square>().is_err());
        assert!("".parse::<Square>().is_err());
        assert!("e2e4".parse::<Square>().is_err());
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(Square::try_from((7, 7)), Ok(Square(7, 7)));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 12)),
            Err(SquareError::ColumnOutOfBounds { col: 12 })
        );
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(1, 1), Some(Square(1, 1)));
        assert_eq!(Square(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_flip_vertical() {
        assert_eq!(Square(6, 4).flip_vertical(), Square(1, 4));
        assert_eq!(Square(0, 0).flip_vertical(), Square(7, 0));
        assert!(!Square(8, 3).flip_vertical().is_valid());
        assert!(!Square(usize::MAX, 3).flip_vertical().is_valid());
    }

    #[test]
    fn test_all_squares() {
        let all: Vec<Square> = Square::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Square(0, 0));
        assert_eq!(all[63], Square(7, 7));
        assert!(all.iter().all(|sq| sq.is_valid()));
    }
}

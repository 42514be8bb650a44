//! Grid coordinates and word axes.

use std::fmt::{self, Display};

/// A cell coordinate on a square crossword grid.
///
/// Both coordinates are zero-based; `row` grows downward and `col` grows to
/// the right.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Axis, Position};
///
/// let pos = Position::new(1, 1);
/// assert_eq!(pos.offset(Axis::Across, 1, 3), Some(Position::new(1, 2)));
/// assert_eq!(pos.offset(Axis::Down, -2, 3), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the position reached by moving `steps` cells along `axis`.
    ///
    /// Returns `None` if the result falls outside a `size`×`size` grid.
    #[must_use]
    pub fn offset(self, axis: Axis, steps: isize, size: usize) -> Option<Self> {
        let (drow, dcol) = axis.unit();
        self.step(drow * steps, dcol * steps, size)
    }

    /// Returns the position shifted by `(drow, dcol)`, or `None` if it leaves
    /// a `size`×`size` grid.
    #[must_use]
    pub fn step(self, drow: isize, dcol: isize, size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(drow)?;
        let col = self.col.checked_add_signed(dcol)?;
        (row < size && col < size).then_some(Self { row, col })
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction in which a word is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Axis {
    /// Left to right along a row.
    #[default]
    Across,
    /// Top to bottom along a column.
    Down,
}

impl Axis {
    /// Both axes, across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other axis.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the `(drow, dcol)` step of one cell forward along this axis.
    #[must_use]
    pub const fn unit(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Across => "across",
            Self::Down => "down",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_inside_grid() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.step(0, -1, 3), None);
        assert_eq!(pos.step(-1, 0, 3), None);
        assert_eq!(pos.step(2, 2, 3), Some(Position::new(2, 2)));
        assert_eq!(pos.step(3, 0, 3), None);
    }

    #[test]
    fn test_offset_follows_axis() {
        let pos = Position::new(1, 1);
        assert_eq!(pos.offset(Axis::Across, 1, 3), Some(Position::new(1, 2)));
        assert_eq!(pos.offset(Axis::Down, -1, 3), Some(Position::new(0, 1)));
        assert_eq!(pos.offset(Axis::Down, 2, 3), None);
        assert_eq!(Position::new(1, 2).offset(Axis::Across, 1, 3), None);
    }

    #[test]
    fn test_axis_toggle() {
        assert_eq!(Axis::Across.toggled(), Axis::Down);
        assert_eq!(Axis::Down.toggled(), Axis::Across);
        assert!(Axis::default().is_across());
    }
}

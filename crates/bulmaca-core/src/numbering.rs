//! Clue numbering of word-start cells.
//!
//! Across and down words are numbered by two independent scans with their
//! own counters. A cell that starts both an across and a down word usually
//! carries two different numbers, one per axis:
//!
//! - across: rows top to bottom, each row left to right; a white cell starts
//!   an across word if it is in the first column or its left neighbour is
//!   black.
//! - down: columns left to right, each column top to bottom; a white cell
//!   starts a down word if it is in the first row or its upper neighbour is
//!   black.

use std::fmt::{self, Display};

use crate::{Axis, Grid, Position, containers::CellArray};

/// A 1-based clue number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClueNumber(u32);

impl ClueNumber {
    /// Creates a clue number.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    #[must_use]
    pub fn new(value: u32) -> Self {
        assert!(value > 0, "clue numbers start at 1");
        Self(value)
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the zero-based position of this clue in its clue list.
    #[must_use]
    pub fn list_index(self) -> usize {
        // u32 always fits in usize on supported targets
        self.0 as usize - 1
    }
}

impl Display for ClueNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Per-axis clue numbers of word-start positions.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Axis, ClueNumbering, Grid, Position};
///
/// let grid = Grid::from_rows(3, ["AB-", "C-D", "-EF"]).unwrap();
/// let numbering = ClueNumbering::compute(&grid);
///
/// // (0, 0) starts both words but gets a number from each counter.
/// assert_eq!(numbering.across_number_at(Position::new(0, 0)).unwrap().get(), 1);
/// assert_eq!(numbering.down_number_at(Position::new(1, 2)).unwrap().get(), 4);
/// assert_eq!(numbering.count(Axis::Across), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueNumbering {
    across: CellArray<Option<ClueNumber>>,
    down: CellArray<Option<ClueNumber>>,
    across_starts: Vec<Position>,
    down_starts: Vec<Position>,
}

impl ClueNumbering {
    /// Numbers every word start of `grid`.
    #[must_use]
    pub fn compute(grid: &Grid) -> Self {
        let size = grid.size();

        let across_starts: Vec<Position> = (0..size)
            .flat_map(|row| (0..size).map(move |col| Position::new(row, col)))
            .filter(|&pos| is_word_start(grid, pos, Axis::Across))
            .collect();
        let down_starts: Vec<Position> = (0..size)
            .flat_map(|col| (0..size).map(move |row| Position::new(row, col)))
            .filter(|&pos| is_word_start(grid, pos, Axis::Down))
            .collect();

        let across = number_starts(size, &across_starts);
        let down = number_starts(size, &down_starts);
        log::debug!(
            "numbered {} across and {} down words",
            across_starts.len(),
            down_starts.len()
        );

        Self {
            across,
            down,
            across_starts,
            down_starts,
        }
    }

    /// Returns the clue number of the `axis` word starting at `pos`.
    #[must_use]
    #[track_caller]
    pub fn number_at(&self, pos: Position, axis: Axis) -> Option<ClueNumber> {
        match axis {
            Axis::Across => self.across[pos],
            Axis::Down => self.down[pos],
        }
    }

    /// Returns the across clue number of the word starting at `pos`.
    #[must_use]
    #[track_caller]
    pub fn across_number_at(&self, pos: Position) -> Option<ClueNumber> {
        self.number_at(pos, Axis::Across)
    }

    /// Returns the down clue number of the word starting at `pos`.
    #[must_use]
    #[track_caller]
    pub fn down_number_at(&self, pos: Position) -> Option<ClueNumber> {
        self.number_at(pos, Axis::Down)
    }

    /// Returns the number of words along `axis`.
    #[must_use]
    pub fn count(&self, axis: Axis) -> usize {
        self.starts(axis).len()
    }

    /// Returns the start positions of `axis` words in clue-number order.
    #[must_use]
    pub fn starts(&self, axis: Axis) -> &[Position] {
        match axis {
            Axis::Across => &self.across_starts,
            Axis::Down => &self.down_starts,
        }
    }
}

/// Returns `true` if `pos` is a white cell that begins a word along `axis`.
#[must_use]
#[track_caller]
pub fn is_word_start(grid: &Grid, pos: Position, axis: Axis) -> bool {
    grid.is_white(pos)
        && pos
            .offset(axis, -1, grid.size())
            .is_none_or(|prev| grid.is_black(prev))
}

fn number_starts(size: usize, starts: &[Position]) -> CellArray<Option<ClueNumber>> {
    let mut numbers = CellArray::new(size, None);
    for (n, &pos) in (1..).zip(starts) {
        numbers[pos] = Some(ClueNumber::new(n));
    }
    numbers
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.len(), rows).unwrap()
    }

    fn number(numbering: &ClueNumbering, row: usize, col: usize, axis: Axis) -> Option<u32> {
        numbering
            .number_at(Position::new(row, col), axis)
            .map(ClueNumber::get)
    }

    #[test]
    fn test_axes_are_numbered_independently() {
        let numbering = ClueNumbering::compute(&grid(&["AB-", "C-D", "-EF"]));

        assert_eq!(number(&numbering, 0, 0, Axis::Across), Some(1));
        assert_eq!(number(&numbering, 1, 0, Axis::Across), Some(2));
        assert_eq!(number(&numbering, 1, 2, Axis::Across), Some(3));
        assert_eq!(number(&numbering, 2, 1, Axis::Across), Some(4));

        assert_eq!(number(&numbering, 0, 0, Axis::Down), Some(1));
        assert_eq!(number(&numbering, 0, 1, Axis::Down), Some(2));
        assert_eq!(number(&numbering, 2, 1, Axis::Down), Some(3));
        assert_eq!(number(&numbering, 1, 2, Axis::Down), Some(4));

        assert_eq!(number(&numbering, 0, 1, Axis::Across), None);
        assert_eq!(number(&numbering, 1, 1, Axis::Down), None);
    }

    #[test]
    fn test_down_scan_is_column_major() {
        // A row-major scan would number (0, 2) before (1, 1).
        let numbering = ClueNumbering::compute(&grid(&["A-C", "DEF", "GHI"]));
        assert_eq!(number(&numbering, 0, 0, Axis::Down), Some(1));
        assert_eq!(number(&numbering, 1, 1, Axis::Down), Some(2));
        assert_eq!(number(&numbering, 0, 2, Axis::Down), Some(3));
    }

    #[test]
    fn test_starts_are_in_number_order() {
        let numbering = ClueNumbering::compute(&grid(&["A-C", "DEF", "GHI"]));
        assert_eq!(
            numbering.starts(Axis::Down),
            &[Position::new(0, 0), Position::new(1, 1), Position::new(0, 2)]
        );
        assert_eq!(numbering.count(Axis::Across), 4);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1_usize..8).prop_flat_map(|size| {
            prop::collection::vec(prop::bool::weighted(0.25), size * size).prop_map(move |black| {
                let rows: Vec<String> = black
                    .chunks(size)
                    .map(|row| row.iter().map(|&b| if b { '-' } else { 'A' }).collect())
                    .collect();
                Grid::from_rows(size, rows).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn numbers_match_direct_scan(grid in arb_grid()) {
            let numbering = ClueNumbering::compute(&grid);
            for axis in Axis::ALL {
                let direct: Vec<Position> = grid
                    .positions()
                    .filter(|&pos| is_word_start(&grid, pos, axis))
                    .collect();
                let numbered: Vec<Position> = grid
                    .positions()
                    .filter(|&pos| numbering.number_at(pos, axis).is_some())
                    .collect();
                prop_assert_eq!(&numbered, &direct);

                let mut values: Vec<u32> = numbered
                    .iter()
                    .filter_map(|&pos| numbering.number_at(pos, axis))
                    .map(ClueNumber::get)
                    .collect();
                values.sort_unstable();
                let expected: Vec<u32> = (1..=u32::try_from(direct.len()).unwrap()).collect();
                prop_assert_eq!(values, expected);
            }
        }
    }
}

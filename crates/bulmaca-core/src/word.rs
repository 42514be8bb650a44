//! Resolving the word that passes through a cell.

use crate::{Axis, ClueNumber, ClueNumbering, Grid, Position};

/// A maximal run of white cells along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    /// Axis the word is read along.
    pub axis: Axis,
    /// Cells of the word, strictly increasing along `axis`.
    pub cells: Vec<Position>,
    /// Clue number of the word's first cell, if it has one.
    pub clue_number: Option<ClueNumber>,
}

impl Word {
    /// Returns the first cell of the word.
    #[must_use]
    pub fn start(&self) -> Position {
        self.cells[0]
    }

    /// Returns the number of cells in the word.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a word contains at least the cell it was resolved from.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns `true` if `pos` is one of the word's cells.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Returns the word through `pos` along `axis`.
///
/// The run is extended from `pos` in both directions until a black cell or
/// the grid edge. An isolated white cell is a word of length one. The clue
/// number comes from `numbering` at the run's first cell and is `None` when
/// the numbering has no entry there.
///
/// Resolving from a black cell yields a word holding only that cell and no
/// clue number.
///
/// # Panics
///
/// Panics if `pos` is outside the grid.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Axis, ClueNumbering, Grid, Position, resolve_word};
///
/// let grid = Grid::from_rows(3, ["ABC", "D-E", "FGH"]).unwrap();
/// let numbering = ClueNumbering::compute(&grid);
///
/// let word = resolve_word(&grid, &numbering, Position::new(2, 2), Axis::Down);
/// assert_eq!(
///     word.cells,
///     vec![Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
/// );
/// // Down numbers run column by column: (0, 0), (0, 1), (2, 1), (0, 2).
/// assert_eq!(word.clue_number.unwrap().get(), 4);
/// ```
#[must_use]
#[track_caller]
pub fn resolve_word(grid: &Grid, numbering: &ClueNumbering, pos: Position, axis: Axis) -> Word {
    if grid.is_black(pos) {
        return Word {
            axis,
            cells: vec![pos],
            clue_number: None,
        };
    }

    let size = grid.size();
    let white = |p: &Position| grid.is_white(*p);

    let mut start = pos;
    while let Some(prev) = start.offset(axis, -1, size).filter(white) {
        start = prev;
    }

    let cells: Vec<Position> = std::iter::successors(Some(start), |p| {
        p.offset(axis, 1, size).filter(white)
    })
    .collect();

    let clue_number = numbering.number_at(start, axis);
    log::trace!(
        "word through {pos} {axis}: {} cells from {start}, clue {clue_number:?}",
        cells.len()
    );

    Word {
        axis,
        cells,
        clue_number,
    }
}

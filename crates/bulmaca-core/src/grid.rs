//! The crossword cell matrix.

use crate::{Position, containers::CellArray};

/// Character marking a black (non-enterable) cell in puzzle text.
pub const BLACK_CELL: char = '-';

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Cell {
    /// A block; never receives a letter.
    Black,
    /// An enterable cell holding its expected letter.
    White(char),
}

impl Cell {
    /// Parses a cell from its puzzle-text character.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        if c == BLACK_CELL {
            Self::Black
        } else {
            Self::White(c)
        }
    }

    /// Returns the expected letter of a white cell.
    #[must_use]
    pub fn solution(self) -> Option<char> {
        match self {
            Self::Black => None,
            Self::White(c) => Some(c),
        }
    }
}

/// The grid rows disagree with the declared size.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MalformedGrid {
    /// The declared size is zero.
    #[display("grid size must be at least 1")]
    ZeroSize,
    /// The number of rows differs from the declared size.
    #[display("grid size mismatch: expected {expected} rows, found {actual}")]
    RowCount {
        /// Declared size.
        expected: usize,
        /// Rows present.
        actual: usize,
    },
    /// A row has the wrong number of cells.
    #[display("grid size mismatch: row {row} has {actual} cells, expected {expected}")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Declared size.
        expected: usize,
        /// Cells present in the row.
        actual: usize,
    },
}

/// A square crossword grid of black and white cells.
///
/// The grid is immutable once built; entered letters live in a separate
/// answer sheet owned by the game session.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Cell, Grid, Position};
///
/// let grid = Grid::from_rows(3, ["AB-", "C-D", "-EF"]).unwrap();
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.cell(Position::new(0, 1)), Cell::White('B'));
/// assert!(grid.is_black(Position::new(1, 1)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: CellArray<Cell>,
}

impl Grid {
    /// Builds a grid from `size` rows of `size` characters each.
    ///
    /// Row length is measured in characters, so multi-byte letters such as
    /// `Ş` count once.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedGrid`] if `size` is zero, the row count differs
    /// from `size`, or any row does not have exactly `size` characters.
    pub fn from_rows<I, S>(size: usize, rows: I) -> Result<Self, MalformedGrid>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if size == 0 {
            return Err(MalformedGrid::ZeroSize);
        }

        let rows: Vec<Vec<Cell>> = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(Cell::from_char).collect())
            .collect();
        if rows.len() != size {
            return Err(MalformedGrid::RowCount {
                expected: size,
                actual: rows.len(),
            });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MalformedGrid::RowLength {
                row,
                expected: size,
                actual: cells.len(),
            });
        }

        let cells = CellArray::from_fn(size, |pos| rows[pos.row][pos.col]);
        Ok(Self { cells })
    }

    /// Returns the side length `N`.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Returns `true` if `pos` is inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(pos)
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    #[track_caller]
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos]
    }

    /// Returns `true` if the cell at `pos` is black.
    #[must_use]
    #[track_caller]
    pub fn is_black(&self, pos: Position) -> bool {
        self.cell(pos).is_black()
    }

    /// Returns `true` if the cell at `pos` is white.
    #[must_use]
    #[track_caller]
    pub fn is_white(&self, pos: Position) -> bool {
        self.cell(pos).is_white()
    }

    /// Returns the expected letter at `pos`, or `None` for black cells.
    #[must_use]
    #[track_caller]
    pub fn solution(&self, pos: Position) -> Option<char> {
        self.cell(pos).solution()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells.iter().map(|(pos, _)| pos)
    }

    /// Iterates over white positions and their expected letters, row-major.
    pub fn white_cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.cells
            .iter()
            .filter_map(|(pos, cell)| cell.solution().map(|c| (pos, c)))
    }

    /// Returns the first white cell in row-major order.
    #[must_use]
    pub fn first_white(&self) -> Option<Position> {
        self.white_cells().next().map(|(pos, _)| pos)
    }
}

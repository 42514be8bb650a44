//! Cursor placement and movement.
//!
//! All movement functions are total: they return the cursor unchanged
//! instead of failing when there is nowhere to go. None of them wraps
//! around the grid.
//!
//! Two scan orders are used when the current line is exhausted:
//!
//! - **forward serpentine**: across scans row-major from the cell after the
//!   cursor, continuing on later rows from column 0; down scans column-major
//!   from the cell below the cursor, continuing on later columns from row 0.
//! - **reverse serpentine**: the same orders walked backward, continuing on
//!   earlier rows (columns) from the last column (row).

use std::fmt::{self, Display};

use bulmaca_core::{Axis, ClueNumbering, Grid, Position, resolve_word};

use crate::Answers;

/// The active cell and the direction words are entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Selected cell; always white.
    pub pos: Position,
    /// Entry direction.
    pub axis: Axis,
}

impl Cursor {
    /// Creates a cursor.
    #[must_use]
    pub const fn new(pos: Position, axis: Axis) -> Self {
        Self { pos, axis }
    }

    /// Returns the initial cursor: the first white cell in row-major order,
    /// entering across.
    ///
    /// Returns `None` if the grid has no white cell.
    #[must_use]
    pub fn start(grid: &Grid) -> Option<Self> {
        grid.first_white().map(|pos| Self::new(pos, Axis::Across))
    }

    fn moved_to(self, pos: Position) -> Self {
        Self { pos, ..self }
    }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.axis)
    }
}

/// Arrow-key direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Direction {
    /// Toward row 0.
    #[display("up")]
    Up,
    /// Toward the last row.
    #[display("down")]
    Down,
    /// Toward column 0.
    #[display("left")]
    Left,
    /// Toward the last column.
    #[display("right")]
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(drow, dcol)` step of one move.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the entry axis implied by moving this way.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Down,
            Self::Left | Self::Right => Axis::Across,
        }
    }
}

/// Moves one white cell in `direction`, skipping black cells.
///
/// The axis is always set from the direction, even if the position does
/// not change. If the grid edge is reached before a white cell, the
/// position stays where it was.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Axis, Grid, Position};
/// use bulmaca_game::{Cursor, Direction, move_step};
///
/// let grid = Grid::from_rows(3, ["A-B", "CDE", "FGH"]).unwrap();
/// let cursor = Cursor::new(Position::new(0, 0), Axis::Down);
///
/// let moved = move_step(cursor, &grid, Direction::Right);
/// assert_eq!(moved, Cursor::new(Position::new(0, 2), Axis::Across));
///
/// let blocked = move_step(cursor, &grid, Direction::Up);
/// assert_eq!(blocked, Cursor::new(Position::new(0, 0), Axis::Down));
/// ```
#[must_use]
pub fn move_step(cursor: Cursor, grid: &Grid, direction: Direction) -> Cursor {
    let (drow, dcol) = direction.step();
    let size = grid.size();
    let target = std::iter::successors(cursor.pos.step(drow, dcol, size), |p| {
        p.step(drow, dcol, size)
    })
    .find(|&p| grid.is_white(p));

    let pos = target.unwrap_or_else(|| {
        log::trace!("move {direction} from {} hit the edge", cursor.pos);
        cursor.pos
    });
    Cursor {
        pos,
        axis: direction.axis(),
    }
}

/// Moves to the next cell that still needs a letter.
///
/// The rest of the cursor's line along `axis` is scanned first, up to the
/// grid edge, for a white empty cell. If there is none, the forward
/// serpentine scan for `axis` continues from there. The cursor is unchanged
/// if no white empty cell remains ahead of it.
#[must_use]
pub fn advance_within_word(cursor: Cursor, grid: &Grid, answers: &Answers, axis: Axis) -> Cursor {
    let size = grid.size();
    let enterable = |p: &Position| grid.is_white(*p) && answers.is_empty_at(*p);

    if let Some(pos) = line_after(cursor.pos, axis, size).find(enterable) {
        log::trace!("advance {axis} within line to {pos}");
        return cursor.moved_to(pos);
    }
    if let Some(pos) = serpentine_forward(cursor.pos, axis, size).find(enterable) {
        log::trace!("advance {axis} to next word at {pos}");
        return cursor.moved_to(pos);
    }
    log::trace!("no empty cell ahead of {}", cursor.pos);
    cursor
}

/// Moves back one white cell, or to the end of the previous word.
///
/// The cursor's line along `axis` is scanned backward to the grid edge for
/// a white cell. If there is none, the reverse serpentine scan looks for the
/// last cell of a word: a white cell whose next cell along `axis` is black
/// or past the edge. Entered letters are not consulted. The cursor is
/// unchanged if nothing is found.
#[must_use]
pub fn retreat_within_word(cursor: Cursor, grid: &Grid, axis: Axis) -> Cursor {
    let size = grid.size();

    if let Some(pos) = line_before(cursor.pos, axis, size).find(|&p| grid.is_white(p)) {
        log::trace!("retreat {axis} within line to {pos}");
        return cursor.moved_to(pos);
    }
    let word_end = |p: &Position| {
        grid.is_white(*p) && p.offset(axis, 1, size).is_none_or(|next| grid.is_black(next))
    };
    if let Some(pos) = serpentine_backward(cursor.pos, axis, size).find(word_end) {
        log::trace!("retreat {axis} to previous word end at {pos}");
        return cursor.moved_to(pos);
    }
    log::trace!("no word before {}", cursor.pos);
    cursor
}

/// Handles a click on the cell at `pos`.
///
/// A black cell is ignored. Clicking the cursor's own cell toggles the
/// axis. Any other white cell becomes the cursor, keeping the current axis
/// if that axis has a numbered word there, otherwise taking the other axis
/// if it does, otherwise entering across.
///
/// # Panics
///
/// Panics if `pos` is outside the grid.
#[must_use]
#[track_caller]
pub fn on_cell_click(cursor: Cursor, grid: &Grid, numbering: &ClueNumbering, pos: Position) -> Cursor {
    if grid.is_black(pos) {
        log::trace!("ignored click on black cell {pos}");
        return cursor;
    }
    if pos == cursor.pos {
        return Cursor {
            axis: cursor.axis.toggled(),
            ..cursor
        };
    }

    let has_word = |axis| resolve_word(grid, numbering, pos, axis).clue_number.is_some();
    let axis = if has_word(cursor.axis) {
        cursor.axis
    } else if has_word(cursor.axis.toggled()) {
        cursor.axis.toggled()
    } else {
        Axis::Across
    };
    Cursor { pos, axis }
}

fn line_after(pos: Position, axis: Axis, size: usize) -> impl Iterator<Item = Position> {
    std::iter::successors(pos.offset(axis, 1, size), move |p| p.offset(axis, 1, size))
}

fn line_before(pos: Position, axis: Axis, size: usize) -> impl Iterator<Item = Position> {
    std::iter::successors(pos.offset(axis, -1, size), move |p| p.offset(axis, -1, size))
}

/// Splits `pos` into (line index, index within the line) for `axis`.
fn split(pos: Position, axis: Axis) -> (usize, usize) {
    match axis {
        Axis::Across => (pos.row, pos.col),
        Axis::Down => (pos.col, pos.row),
    }
}

fn join(line: usize, index: usize, axis: Axis) -> Position {
    match axis {
        Axis::Across => Position::new(line, index),
        Axis::Down => Position::new(index, line),
    }
}

fn serpentine_forward(pos: Position, axis: Axis, size: usize) -> impl Iterator<Item = Position> {
    let (line, index) = split(pos, axis);
    (line..size).flat_map(move |l| {
        let from = if l == line { index + 1 } else { 0 };
        (from..size).map(move |i| join(l, i, axis))
    })
}

fn serpentine_backward(pos: Position, axis: Axis, size: usize) -> impl Iterator<Item = Position> {
    let (line, index) = split(pos, axis);
    (0..=line).rev().flat_map(move |l| {
        let to = if l == line { index } else { size };
        (0..to).rev().map(move |i| join(l, i, axis))
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn grid(rows: &[&str]) -> Grid {
        Grid::from_rows(rows.len(), rows).unwrap()
    }

    fn at(row: usize, col: usize, axis: Axis) -> Cursor {
        Cursor::new(Position::new(row, col), axis)
    }

    #[test]
    fn test_start_skips_black_cells() {
        let grid = grid(&["--A", "BCD", "EFG"]);
        assert_eq!(Cursor::start(&grid), Some(at(0, 2, Axis::Across)));
        assert_eq!(Cursor::start(&self::grid(&["--", "--"])), None);
    }

    #[test]
    fn test_move_step_skips_black_and_stops_at_edge() {
        let grid = grid(&["A--B", "CDEF", "G-HI", "JKLM"]);
        let cursor = at(0, 0, Axis::Down);

        assert_eq!(move_step(cursor, &grid, Direction::Right), at(0, 3, Axis::Across));
        assert_eq!(move_step(cursor, &grid, Direction::Left), at(0, 0, Axis::Across));
        assert_eq!(
            move_step(at(1, 1, Axis::Across), &grid, Direction::Down),
            at(3, 1, Axis::Down)
        );
        // Only black cells up to the edge: stay.
        let grid = self::grid(&["AB", "C-"]);
        assert_eq!(
            move_step(at(1, 0, Axis::Across), &grid, Direction::Right),
            at(1, 0, Axis::Across)
        );
    }

    #[test]
    fn test_advance_within_line_skips_filled() {
        let grid = grid(&["ABC-", "DEFG", "HI-J", "KLMN"]);
        let mut answers = Answers::new(4);
        answers.set(Position::new(1, 1), 'E');
        let cursor = at(1, 0, Axis::Across);
        assert_eq!(
            advance_within_word(cursor, &grid, &answers, Axis::Across),
            at(1, 2, Axis::Across)
        );
    }

    #[test]
    fn test_advance_scans_past_black_to_line_end() {
        // (2, 1) ends a word, but (2, 3) on the same row is still empty.
        let grid = grid(&["ABCD", "EFGH", "IJ-K", "LMNO"]);
        let answers = Answers::new(4);
        assert_eq!(
            advance_within_word(at(2, 1, Axis::Across), &grid, &answers, Axis::Across),
            at(2, 3, Axis::Across)
        );
    }

    #[test]
    fn test_advance_moves_to_next_word() {
        // The first row is complete; the next empty cell is on the row below.
        let grid = grid(&["ABC", "DEF", "GHI"]);
        let mut answers = Answers::new(3);
        for col in 0..3 {
            answers.set(Position::new(0, col), 'X');
        }
        assert_eq!(
            advance_within_word(at(0, 2, Axis::Across), &grid, &answers, Axis::Across),
            at(1, 0, Axis::Across)
        );
    }

    #[test]
    fn test_advance_down_is_column_major() {
        let grid = grid(&["ABC", "DEF", "GHI"]);
        let mut answers = Answers::new(3);
        answers.set(Position::new(0, 1), 'X');
        assert_eq!(
            advance_within_word(at(2, 0, Axis::Down), &grid, &answers, Axis::Down),
            at(1, 1, Axis::Down)
        );
    }

    #[test]
    fn test_advance_without_target_stays() {
        let grid = grid(&["AB", "CD"]);
        let mut answers = Answers::new(2);
        answers.set(Position::new(0, 0), 'A');
        answers.set(Position::new(0, 1), 'B');
        answers.set(Position::new(1, 0), 'C');
        // Only (1, 1) is empty, and it is the cursor itself.
        let cursor = at(1, 1, Axis::Across);
        assert_eq!(advance_within_word(cursor, &grid, &answers, Axis::Across), cursor);
        // No wrap-around to earlier cells.
        let mut answers = Answers::new(2);
        answers.set(Position::new(1, 1), 'D');
        let cursor = at(1, 0, Axis::Across);
        assert_eq!(advance_within_word(cursor, &grid, &answers, Axis::Across), cursor);
    }

    #[test]
    fn test_retreat_within_line_ignores_fill() {
        let grid = grid(&["AB-C", "DEFG", "HIJK", "LMNO"]);
        // The black cell at (0, 2) is skipped.
        assert_eq!(
            retreat_within_word(at(0, 3, Axis::Across), &grid, Axis::Across),
            at(0, 1, Axis::Across)
        );
    }

    #[test]
    fn test_retreat_to_previous_word_end() {
        // The row above ends at (0, 2).
        let grid = grid(&["ABC", "DEF", "GHI"]);
        assert_eq!(
            retreat_within_word(at(1, 0, Axis::Across), &grid, Axis::Across),
            at(0, 2, Axis::Across)
        );

        let grid = self::grid(&["AB-", "C-D", "EFG"]);
        assert_eq!(
            retreat_within_word(at(0, 0, Axis::Down), &grid, Axis::Down),
            at(0, 0, Axis::Down)
        );
        assert_eq!(
            retreat_within_word(at(0, 1, Axis::Down), &grid, Axis::Down),
            at(2, 0, Axis::Down)
        );
    }

    #[test]
    fn test_retreat_at_origin_stays() {
        let grid = grid(&["AB", "CD"]);
        let cursor = at(0, 0, Axis::Across);
        assert_eq!(retreat_within_word(cursor, &grid, Axis::Across), cursor);
    }

    #[test]
    fn test_click_black_is_ignored() {
        let grid = grid(&["A-", "BC"]);
        let numbering = ClueNumbering::compute(&grid);
        let cursor = at(0, 0, Axis::Across);
        assert_eq!(on_cell_click(cursor, &grid, &numbering, Position::new(0, 1)), cursor);
    }

    #[test]
    fn test_click_same_cell_toggles_axis() {
        let grid = grid(&["AB", "CD"]);
        let numbering = ClueNumbering::compute(&grid);
        let cursor = at(1, 1, Axis::Down);
        assert_eq!(
            on_cell_click(cursor, &grid, &numbering, Position::new(1, 1)),
            at(1, 1, Axis::Across)
        );
    }

    #[test]
    fn test_click_other_cell_keeps_axis() {
        let grid = grid(&["AB", "CD"]);
        let numbering = ClueNumbering::compute(&grid);
        assert_eq!(
            on_cell_click(at(0, 0, Axis::Down), &grid, &numbering, Position::new(1, 1)),
            at(1, 1, Axis::Down)
        );
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1_usize..7).prop_flat_map(|size| {
            prop::collection::vec(prop::bool::weighted(0.3), size * size).prop_map(move |black| {
                let mut rows: Vec<String> = black
                    .chunks(size)
                    .map(|row| row.iter().map(|&b| if b { '-' } else { 'A' }).collect())
                    .collect();
                // Keep at least one white cell.
                rows[0].replace_range(0..1, "A");
                Grid::from_rows(size, rows).unwrap()
            })
        })
    }

    fn arb_case() -> impl Strategy<Value = (Grid, Answers, Cursor)> {
        arb_grid().prop_flat_map(|grid| {
            let size = grid.size();
            let whites: Vec<Position> = grid.white_cells().map(|(p, _)| p).collect();
            (
                Just(grid),
                prop::collection::vec(any::<bool>(), size * size),
                prop::sample::select(whites),
                any::<bool>(),
            )
                .prop_map(move |(grid, filled, pos, down)| {
                    let mut answers = Answers::new(size);
                    for ((p, _), f) in grid.white_cells().zip(filled) {
                        if f {
                            answers.set(p, 'A');
                        }
                    }
                    let axis = if down { Axis::Down } else { Axis::Across };
                    (grid, answers, Cursor::new(pos, axis))
                })
        })
    }

    proptest! {
        #[test]
        fn navigation_never_lands_on_black(
            (grid, answers, cursor) in arb_case(),
            direction in prop::sample::select(Direction::ALL.to_vec()),
        ) {
            let numbering = ClueNumbering::compute(&grid);
            let moved = [
                move_step(cursor, &grid, direction),
                advance_within_word(cursor, &grid, &answers, cursor.axis),
                retreat_within_word(cursor, &grid, cursor.axis),
            ];
            for next in moved {
                prop_assert!(grid.contains(next.pos));
                prop_assert!(grid.is_white(next.pos));
            }
            for (pos, _) in grid.white_cells() {
                let clicked = on_cell_click(cursor, &grid, &numbering, pos);
                prop_assert_eq!(clicked.pos, pos);
            }
        }

        #[test]
        fn advance_lands_on_empty_or_stays(
            (grid, answers, cursor) in arb_case(),
        ) {
            let next = advance_within_word(cursor, &grid, &answers, cursor.axis);
            prop_assert!(next == cursor || answers.is_empty_at(next.pos));
            prop_assert_eq!(next.axis, cursor.axis);
        }
    }
}

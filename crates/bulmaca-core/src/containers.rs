//! Square containers indexed by [`Position`].

use std::ops::{Index, IndexMut};

use crate::Position;

/// An `N`×`N` row-major array addressed by [`Position`].
///
/// This is the storage behind the grid, the answer sheet, and both clue
/// numbering maps. Indexing with a position outside the square is a
/// contract violation and panics.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Position, containers::CellArray};
///
/// let mut marks = CellArray::new(3, false);
/// marks[Position::new(2, 1)] = true;
/// assert!(marks[Position::new(2, 1)]);
/// assert_eq!(marks.iter().filter(|(_, m)| **m).count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellArray<T> {
    size: usize,
    data: Vec<T>,
}

impl<T> CellArray<T> {
    /// Creates an array by calling `f` for every position in row-major order.
    #[must_use]
    pub fn from_fn<F>(size: usize, mut f: F) -> Self
    where
        F: FnMut(Position) -> T,
    {
        let data = (0..size * size)
            .map(|i| f(Position::new(i / size, i % size)))
            .collect();
        Self { size, data }
    }

    /// Returns the side length of the square.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `pos` lies inside the square.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Returns the element at `pos`, or `None` outside the square.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.data[pos.row * self.size + pos.col])
    }

    /// Iterates over `(position, element)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        let size = self.size;
        self.data
            .iter()
            .enumerate()
            .map(move |(i, v)| (Position::new(i / size, i % size), v))
    }

    #[track_caller]
    fn offset_of(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of range for {0}x{0} grid",
            self.size
        );
        pos.row * self.size + pos.col
    }
}

impl<T: Clone> CellArray<T> {
    /// Creates an array with every element set to `value`.
    #[must_use]
    pub fn new(size: usize, value: T) -> Self {
        Self {
            size,
            data: vec![value; size * size],
        }
    }
}

impl<T> Index<Position> for CellArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, pos: Position) -> &T {
        let offset = self.offset_of(pos);
        &self.data[offset]
    }
}

impl<T> IndexMut<Position> for CellArray<T> {
    #[track_caller]
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let offset = self.offset_of(pos);
        &mut self.data[offset]
    }
}

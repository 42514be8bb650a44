use bulmaca_core::{Position, containers::CellArray};

/// The player's entered letters, one optional letter per cell.
///
/// Black cells are never written by the game session, so their slots stay
/// empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    cells: CellArray<Option<char>>,
}

impl Answers {
    /// Creates an empty `size`×`size` answer sheet.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            cells: CellArray::new(size, None),
        }
    }

    /// Returns the side length of the sheet.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Returns the letter entered at `pos`.
    #[must_use]
    #[track_caller]
    pub fn get(&self, pos: Position) -> Option<char> {
        self.cells[pos]
    }

    /// Writes `letter` at `pos`, replacing any previous letter.
    #[track_caller]
    pub fn set(&mut self, pos: Position, letter: char) {
        self.cells[pos] = Some(letter);
    }

    /// Clears `pos` and returns the letter it held.
    #[track_caller]
    pub fn clear(&mut self, pos: Position) -> Option<char> {
        self.cells[pos].take()
    }

    /// Returns `true` if no letter is entered at `pos`.
    #[must_use]
    #[track_caller]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.cells[pos].is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_clear() {
        let mut answers = Answers::new(2);
        let pos = Position::new(1, 0);
        assert!(answers.is_empty_at(pos));

        answers.set(pos, 'Ş');
        assert_eq!(answers.get(pos), Some('Ş'));
        assert_eq!(answers.get(Position::new(0, 0)), None);

        assert_eq!(answers.clear(pos), Some('Ş'));
        assert!(answers.is_empty_at(pos));
        assert_eq!(answers.clear(pos), None);
    }
}

//! Core data structures for crossword puzzles.
//!
//! This crate holds the immutable side of a puzzle: the cell matrix, the clue
//! numbering derived from it, word resolution, and the text format puzzles
//! are stored in. Session state (entered letters, cursor, completion) lives
//! in `bulmaca-game`.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`position`]: [`Position`] and the word [`Axis`].
//! 2. **Storage** - [`containers`]: [`CellArray`], an `N`×`N` array indexed
//!    by position.
//! 3. **Grid model** - [`grid`]: [`Grid`] of black and white [`Cell`]s.
//! 4. **Derived structure**
//!    - [`numbering`]: per-axis [`ClueNumbering`] of word starts
//!    - [`word`]: [`resolve_word`] for the word through a cell
//! 5. **Puzzle text** - [`puzzle`]: [`Puzzle`] parsing, [`ClueList`], and the
//!    obfuscated payload codec.
//!
//! [`CellArray`]: containers::CellArray
//!
//! # Examples
//!
//! ```
//! use bulmaca_core::{Axis, ClueNumbering, Position, Puzzle, resolve_word};
//!
//! let puzzle = Puzzle::parse(
//!     "Author: Ada\nSize: 3\nAB-\nC-D\n-EF\nH1: one\nH2: two\nH3: three\nH4: four\nV1: down",
//! )
//! .unwrap();
//! let numbering = ClueNumbering::compute(&puzzle.grid);
//!
//! let word = resolve_word(&puzzle.grid, &numbering, Position::new(0, 1), Axis::Across);
//! assert_eq!(word.start(), Position::new(0, 0));
//! let number = word.clue_number.unwrap();
//! assert_eq!(puzzle.across_clues.for_number(number), Some("one"));
//! ```

pub mod containers;
pub mod grid;
pub mod numbering;
pub mod position;
pub mod puzzle;
pub mod word;

// Re-export commonly used types
pub use self::{
    grid::{BLACK_CELL, Cell, Grid, MalformedGrid},
    numbering::{ClueNumber, ClueNumbering},
    position::{Axis, Position},
    puzzle::{ClueList, Puzzle, PuzzleError, decode_payload, load_puzzle, obfuscate},
    word::{Word, resolve_word},
};

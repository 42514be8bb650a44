//! Crossword game session management.
//!
//! This crate turns a parsed [`Puzzle`](bulmaca_core::Puzzle) into a playable
//! session: it tracks entered letters, moves the cursor the way crossword
//! players expect, and decides when the puzzle is solved.
//!
//! # Overview
//!
//! - [`Game`]: the session; every operation returns the [`Effect`]s the host
//!   should act on
//! - [`Cursor`] and the movement functions [`move_step`],
//!   [`advance_within_word`], [`retreat_within_word`] and [`on_cell_click`]
//! - [`is_complete`] and [`all_filled`], with the date-dependent
//!   [`CompletionPolicy`]
//! - [`Locale`]: uppercasing rules and keyboard layouts
//! - [`Timer`] and [`format_elapsed`] for the solve clock
//!
//! # Examples
//!
//! ```
//! use bulmaca_core::{Position, Puzzle};
//! use bulmaca_game::{CompletionPolicy, Direction, Effect, Game};
//!
//! let puzzle = Puzzle::parse("Author: Ada\nSize: 2\nAB\nCD\nH1: top\nH2: bottom").unwrap();
//! let mut game = Game::new(puzzle, "2026-03-01", CompletionPolicy::default()).unwrap();
//!
//! let effects = game.move_cursor(Direction::Down);
//! assert!(matches!(effects[..], [Effect::CursorMoved(_)]));
//! assert_eq!(game.cursor().pos, Position::new(1, 0));
//! ```

pub use self::{answers::*, completion::*, cursor::*, game::*, locale::*, timer::*};

mod answers;
mod completion;
mod cursor;
mod game;
pub mod locale;
mod timer;

/// Errors that can occur when starting a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The puzzle grid has no white cell to place the cursor on.
    #[display("puzzle has no white cell")]
    NoWhiteCell,
}

use bulmaca_core::{Axis, ClueNumber, ClueNumbering, Grid, Position, Puzzle, Word, resolve_word};

use crate::{
    Answers, CompletionPolicy, Cursor, Direction, GameError, Locale, advance_within_word,
    all_filled, is_complete, locale, move_step, on_cell_click, retreat_within_word,
};

/// Something the host has to react to after a game operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Effect {
    /// The letter at this position was written or cleared.
    AnswerChanged(Position),
    /// The cursor now has this value.
    CursorMoved(Cursor),
    /// Every white cell holds the correct letter.
    PuzzleSolved,
    /// Every white cell is filled but some letters are wrong.
    ///
    /// Reported once per fill cycle; clearing a cell starts a new cycle.
    MistakesRemain,
}

/// Whether the puzzle has been solved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::IsVariant)]
pub enum GameStatus {
    /// Letters may still be entered.
    #[default]
    InProgress,
    /// The puzzle is solved and the answer sheet is frozen.
    Solved,
}

/// A crossword solving session.
///
/// The game owns the puzzle, its clue numbering, the player's answers and
/// the cursor. Every mutating operation returns the [`Effect`]s the host
/// needs to redraw and to show dialogs.
///
/// # Example
///
/// ```
/// use bulmaca_core::{Position, Puzzle};
/// use bulmaca_game::{CompletionPolicy, Effect, Game};
///
/// let puzzle = Puzzle::parse("Author: Ada\nSize: 2\nAB\nC-\nH1: ab\nH2: c\nV1: ac\nV2: b").unwrap();
/// let mut game = Game::new(puzzle, "2026-01-01", CompletionPolicy::default()).unwrap();
///
/// assert_eq!(game.cursor().pos, Position::new(0, 0));
/// assert_eq!(game.current_clue(), Some("ab"));
///
/// game.input_letter('a');
/// game.input_letter('b');
/// let effects = game.input_letter('c');
/// assert!(effects.contains(&Effect::PuzzleSolved));
/// assert!(game.status().is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    puzzle: Puzzle,
    numbering: ClueNumbering,
    answers: Answers,
    cursor: Cursor,
    puzzle_date: String,
    policy: CompletionPolicy,
    status: GameStatus,
    mistakes_reported: bool,
}

impl Game {
    /// Starts a session on `puzzle`, dated `puzzle_date` (`YYYY-MM-DD`).
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoWhiteCell`] if the grid has no cell to enter
    /// letters in.
    pub fn new(
        puzzle: Puzzle,
        puzzle_date: impl Into<String>,
        policy: CompletionPolicy,
    ) -> Result<Self, GameError> {
        let cursor = Cursor::start(&puzzle.grid).ok_or(GameError::NoWhiteCell)?;
        let numbering = ClueNumbering::compute(&puzzle.grid);
        let answers = Answers::new(puzzle.grid.size());
        let puzzle_date = puzzle_date.into();
        log::info!(
            "new game for {puzzle_date} ({} locale), cursor at {cursor}",
            policy.locale
        );
        Ok(Self {
            puzzle,
            numbering,
            answers,
            cursor,
            puzzle_date,
            policy,
            status: GameStatus::InProgress,
            mistakes_reported: false,
        })
    }

    /// Returns the puzzle being solved.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the puzzle grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.puzzle.grid
    }

    /// Returns the clue numbering of the grid.
    #[must_use]
    pub fn numbering(&self) -> &ClueNumbering {
        &self.numbering
    }

    /// Returns the entered letters.
    #[must_use]
    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Returns the cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Returns the puzzle date the session was started with.
    #[must_use]
    pub fn puzzle_date(&self) -> &str {
        &self.puzzle_date
    }

    /// Returns the session locale.
    #[must_use]
    pub fn locale(&self) -> Locale {
        self.policy.locale
    }

    /// Returns whether the puzzle has been solved.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the word under the cursor along the cursor's axis.
    #[must_use]
    pub fn current_word(&self) -> Word {
        resolve_word(self.grid(), &self.numbering, self.cursor.pos, self.cursor.axis)
    }

    /// Returns the clue of the word under the cursor.
    ///
    /// The clue is looked up by position in the axis' clue list, so the
    /// `n`-th clue in the file is shown for clue number `n`.
    #[must_use]
    pub fn current_clue(&self) -> Option<&str> {
        let number = self.current_word().clue_number?;
        self.puzzle.clues(self.cursor.axis).for_number(number)
    }

    /// Writes a letter at the cursor and moves on.
    ///
    /// Characters that are not letters are ignored, as is any input once
    /// the puzzle is solved. The letter is stored uppercased for the
    /// session locale. When the last empty cell is filled the answers are
    /// checked and either [`Effect::PuzzleSolved`] or (once per fill cycle)
    /// [`Effect::MistakesRemain`] is reported. The cursor then advances
    /// along its axis to the next empty cell.
    pub fn input_letter(&mut self, c: char) -> Vec<Effect> {
        if self.status.is_solved() {
            log::debug!("ignored {c:?}: puzzle already solved");
            return vec![];
        }
        if !locale::is_letter(c) {
            log::trace!("ignored non-letter {c:?}");
            return vec![];
        }
        let pos = self.cursor.pos;
        if self.grid().is_black(pos) {
            return vec![];
        }

        let letter = self.policy.locale.uppercase(c);
        self.answers.set(pos, letter);
        log::debug!("entered {letter} at {pos}");
        let mut effects = vec![Effect::AnswerChanged(pos)];

        if all_filled(self.grid(), &self.answers) {
            if is_complete(self.grid(), &self.answers, &self.puzzle_date, &self.policy) {
                log::info!("puzzle {} solved", self.puzzle_date);
                self.status = GameStatus::Solved;
                effects.push(Effect::PuzzleSolved);
            } else if !self.mistakes_reported {
                log::info!("grid filled with mistakes");
                self.mistakes_reported = true;
                effects.push(Effect::MistakesRemain);
            }
        }

        let axis = self.cursor.axis;
        let next = advance_within_word(self.cursor, self.grid(), &self.answers, axis);
        self.set_cursor(next, &mut effects);
        effects
    }

    /// Clears the cursor cell, or moves back if it is already empty.
    ///
    /// Ignored once the puzzle is solved.
    pub fn backspace(&mut self) -> Vec<Effect> {
        if self.status.is_solved() {
            return vec![];
        }
        let pos = self.cursor.pos;
        if self.answers.clear(pos).is_some() {
            log::debug!("cleared {pos}");
            self.mistakes_reported = false;
            return vec![Effect::AnswerChanged(pos)];
        }

        let mut effects = vec![];
        let axis = self.cursor.axis;
        let prev = retreat_within_word(self.cursor, self.grid(), axis);
        self.set_cursor(prev, &mut effects);
        effects
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, direction: Direction) -> Vec<Effect> {
        let mut effects = vec![];
        let next = move_step(self.cursor, self.grid(), direction);
        self.set_cursor(next, &mut effects);
        effects
    }

    /// Handles a click on the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[track_caller]
    pub fn click_cell(&mut self, pos: Position) -> Vec<Effect> {
        let mut effects = vec![];
        let next = on_cell_click(self.cursor, self.grid(), &self.numbering, pos);
        self.set_cursor(next, &mut effects);
        effects
    }

    /// Switches the entry axis without moving.
    pub fn toggle_axis(&mut self) -> Vec<Effect> {
        let mut effects = vec![];
        let next = Cursor {
            axis: self.cursor.axis.toggled(),
            ..self.cursor
        };
        self.set_cursor(next, &mut effects);
        effects
    }

    /// Returns the clue number shown in the cell at `pos` for `axis`, if a
    /// word starts there.
    #[must_use]
    #[track_caller]
    pub fn clue_number_at(&self, pos: Position, axis: Axis) -> Option<u32> {
        self.numbering.number_at(pos, axis).map(ClueNumber::get)
    }

    fn set_cursor(&mut self, next: Cursor, effects: &mut Vec<Effect>) {
        if next != self.cursor {
            log::trace!("cursor {} -> {next}", self.cursor);
            self.cursor = next;
            effects.push(Effect::CursorMoved(next));
        }
    }
}

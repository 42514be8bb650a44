//! Deciding whether a filled grid is correct.

use bulmaca_core::Grid;
use chrono::NaiveDate;

use crate::{Answers, Locale, locale::fold_turkish};

/// Last puzzle date for which Turkish letters may be answered with their
/// Latin look-alikes.
pub const DEFAULT_LEGACY_CUTOFF: NaiveDate = match NaiveDate::from_ymd_opt(2025, 7, 10) {
    Some(date) => date,
    None => panic!("invalid legacy cutoff date"),
};

/// Date format of puzzle dates (`YYYY-MM-DD`).
pub const PUZZLE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Rules used to compare entered letters with the solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionPolicy {
    /// Locale used to uppercase both sides before comparing.
    pub locale: Locale,
    /// Puzzles dated on or before this day accept folded Turkish letters.
    pub legacy_cutoff: NaiveDate,
}

impl CompletionPolicy {
    /// Creates a policy for `locale` with the default legacy cutoff.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            legacy_cutoff: DEFAULT_LEGACY_CUTOFF,
        }
    }

    /// Returns `true` if a puzzle dated `puzzle_date` gets the lenient
    /// second pass.
    ///
    /// A date that does not parse as `YYYY-MM-DD` never does.
    #[must_use]
    pub fn allows_legacy_fold(&self, puzzle_date: &str) -> bool {
        match NaiveDate::parse_from_str(puzzle_date, PUZZLE_DATE_FORMAT) {
            Ok(date) => date <= self.legacy_cutoff,
            Err(err) => {
                log::debug!("puzzle date `{puzzle_date}` is not a date ({err}); exact match only");
                false
            }
        }
    }
}

impl Default for CompletionPolicy {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

/// Returns `true` if every white cell has an entered letter.
#[must_use]
pub fn all_filled(grid: &Grid, answers: &Answers) -> bool {
    grid.white_cells().all(|(pos, _)| !answers.is_empty_at(pos))
}

/// Returns `true` if the entered letters solve the puzzle.
///
/// Letters are compared after uppercasing both sides with the policy's
/// locale. When that fails and the puzzle is old enough (see
/// [`CompletionPolicy::allows_legacy_fold`]), the comparison is repeated with
/// `Ş İ Ğ Ü Ö Ç` folded to `S I G U O C` on both sides.
///
/// # Examples
///
/// ```
/// use bulmaca_core::{Grid, Position};
/// use bulmaca_game::{Answers, CompletionPolicy, is_complete};
///
/// let grid = Grid::from_rows(1, ["İ"]).unwrap();
/// let mut answers = Answers::new(1);
/// answers.set(Position::new(0, 0), 'I');
///
/// let policy = CompletionPolicy::default();
/// assert!(is_complete(&grid, &answers, "2025-07-01", &policy));
/// assert!(!is_complete(&grid, &answers, "2025-08-01", &policy));
/// ```
#[must_use]
pub fn is_complete(grid: &Grid, answers: &Answers, puzzle_date: &str, policy: &CompletionPolicy) -> bool {
    if matches_with(grid, answers, |c| policy.locale.uppercase(c)) {
        return true;
    }
    if !policy.allows_legacy_fold(puzzle_date) {
        return false;
    }
    let matched = matches_with(grid, answers, |c| fold_turkish(policy.locale.uppercase(c)));
    if matched {
        log::info!("puzzle {puzzle_date} accepted with folded Turkish letters");
    }
    matched
}

fn matches_with<F>(grid: &Grid, answers: &Answers, normalize: F) -> bool
where
    F: Fn(char) -> char,
{
    grid.white_cells().all(|(pos, expected)| {
        let matched = answers
            .get(pos)
            .is_some_and(|entered| normalize(entered) == normalize(expected));
        if !matched {
            log::trace!("mismatch at {pos}: expected {expected:?}, got {:?}", answers.get(pos));
        }
        matched
    })
}

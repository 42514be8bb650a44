//! Locating and loading the puzzle to play.
//!
//! Puzzles live at `<dir>/<lang>/<YYYY-MM-DD>.txt`. The newest file dated
//! today or up to [`SEARCH_DAYS`] days earlier is played; if none exists,
//! today's path is tried anyway so the failure names the expected file.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use bulmaca_core::{Puzzle, PuzzleError, load_puzzle};
use bulmaca_game::PUZZLE_DATE_FORMAT;
use chrono::{Days, NaiveDate};

use crate::config::AppConfig;

/// How many days to look back for the latest puzzle and ahead for the
/// backlog.
pub const SEARCH_DAYS: u64 = 30;

/// Errors while reading the puzzle file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read.
    #[display("failed to read {}: {source}", path.display())]
    Read {
        /// File that was read.
        #[error(not(source))]
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file is not a valid puzzle.
    #[display("invalid puzzle: {_0}")]
    #[from]
    Puzzle(PuzzleError),
}

/// A puzzle read from disk, with the date it is played as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedPuzzle {
    /// Parsed puzzle.
    pub puzzle: Puzzle,
    /// Puzzle date as `YYYY-MM-DD`.
    pub date: String,
    /// File the puzzle came from.
    pub path: PathBuf,
}

/// Dated puzzle files of one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSource {
    lang_dir: PathBuf,
}

impl PuzzleSource {
    /// Creates a source for `<dir>/<lang>`.
    #[must_use]
    pub fn new(dir: &Path, lang: &str) -> Self {
        Self {
            lang_dir: dir.join(lang),
        }
    }

    /// Returns the path of the puzzle for `date`.
    #[must_use]
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.lang_dir
            .join(format!("{}.txt", date.format(PUZZLE_DATE_FORMAT)))
    }

    fn exists(&self, date: NaiveDate) -> bool {
        self.path_for(date).is_file()
    }

    /// Returns the date of the newest puzzle from `today` back, falling back
    /// to `today` when none is found.
    #[must_use]
    pub fn latest(&self, today: NaiveDate) -> NaiveDate {
        let found = (0..SEARCH_DAYS)
            .filter_map(|i| today.checked_sub_days(Days::new(i)))
            .find(|&date| self.exists(date));
        if let Some(date) = found {
            log::info!("latest puzzle is {date}");
            date
        } else {
            log::warn!(
                "no puzzle in the last {SEARCH_DAYS} days under {}",
                self.lang_dir.display()
            );
            today
        }
    }

    /// Counts consecutive days after `today` that already have a puzzle.
    #[must_use]
    pub fn backlog(&self, today: NaiveDate) -> usize {
        (1..=SEARCH_DAYS)
            .map_while(|i| today.checked_add_days(Days::new(i)))
            .take_while(|&date| self.exists(date))
            .count()
    }
}

/// Reads and parses the puzzle selected by `config`.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or parsed.
pub fn load(config: &AppConfig) -> Result<LoadedPuzzle, LoadError> {
    let (path, date) = if let Some(path) = &config.puzzle_override {
        (path.clone(), config.today)
    } else {
        let source = PuzzleSource::new(&config.puzzle_dir, &config.lang);
        let date = source.latest(config.today);
        (source.path_for(date), date)
    };
    log::info!("loading puzzle {}", path.display());
    let raw = fs::read_to_string(&path).map_err(|source| LoadError::Read {
        path: path.clone(),
        source,
    })?;
    let puzzle = load_puzzle(&raw)?;
    Ok(LoadedPuzzle {
        puzzle,
        date: date.format(PUZZLE_DATE_FORMAT).to_string(),
        path,
    })
}

use std::time::{Duration, Instant};

use bulmaca_game::{Game, Timer};

use crate::localization::Strings;

// AppState holds the session: the game, its clock and what the header shows.
#[derive(Debug)]
pub(crate) struct AppState {
    pub(crate) game: Game,
    pub(crate) timer: Timer,
    pub(crate) strings: Strings,
    pub(crate) backlog: usize,
}

impl AppState {
    #[must_use]
    pub(crate) fn new(game: Game, strings: Strings, backlog: usize) -> Self {
        Self {
            game,
            timer: Timer::new(),
            strings,
            backlog,
        }
    }

    /// Time on the clock; frozen once the puzzle is solved.
    #[must_use]
    pub(crate) fn elapsed(&self, now: Instant) -> Duration {
        self.timer.elapsed(now)
    }
}

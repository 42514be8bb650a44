use std::{fmt::Write as _, time::Instant};

use bulmaca_core::{Axis, containers::CellArray};
use bulmaca_game::{Game, PUZZLE_DATE_FORMAT, format_elapsed};
use chrono::NaiveDate;

use crate::{
    localization::Strings,
    state::{AppState, UiState},
    ui::{
        clue_bar::ClueBarViewModel,
        game_screen::GameScreenViewModel,
        grid::{GridCell, GridCellContent, GridViewModel, GridVisualState},
        keyboard::KeyboardViewModel,
        modal::ModalViewModel,
        status_line::StatusLineViewModel,
    },
};

#[must_use]
pub(crate) fn build_grid_vm(game: &Game) -> GridViewModel {
    let grid = game.grid();
    let cursor = game.cursor();
    let word = game.current_word();

    let cells = CellArray::from_fn(grid.size(), |pos| {
        if grid.is_black(pos) {
            return GridCell {
                content: GridCellContent::Black,
                visual_state: GridVisualState::empty(),
            };
        }
        let mut visual_state = GridVisualState::empty();
        if pos == cursor.pos {
            visual_state |= GridVisualState::SELECTED;
        }
        if word.contains(pos) {
            visual_state |= GridVisualState::WORD;
        }
        GridCell {
            content: GridCellContent::White {
                number: game.clue_number_at(pos, cursor.axis),
                letter: game.answers().get(pos),
            },
            visual_state,
        }
    });
    GridViewModel::new(cells)
}

#[must_use]
pub(crate) fn build_clue_bar_vm(game: &Game, strings: &Strings) -> ClueBarViewModel {
    let axis = game.cursor().axis;
    let label = game
        .current_word()
        .clue_number
        .map(|number| {
            let short = match axis {
                Axis::Across => &strings.across_short,
                Axis::Down => &strings.down_short,
            };
            format!("{number}{short}")
        })
        .unwrap_or_default();
    let clue = game.current_clue().unwrap_or_default().to_owned();
    ClueBarViewModel::new(label, clue)
}

/// Formats a `YYYY-MM-DD` puzzle date for display, falling back to the raw
/// text when it does not parse or `format` is not a valid pattern.
#[must_use]
pub(crate) fn display_date(date: &str, format: &str) -> String {
    let Ok(parsed) = NaiveDate::parse_from_str(date, PUZZLE_DATE_FORMAT) else {
        return date.to_owned();
    };
    let mut out = String::new();
    if write!(out, "{}", parsed.format(format)).is_err() {
        log::warn!("invalid date format `{format}`");
        return date.to_owned();
    }
    out
}

#[must_use]
pub(crate) fn build_status_line_vm(app_state: &AppState, now: Instant) -> StatusLineViewModel {
    let strings = &app_state.strings;
    let game = &app_state.game;
    StatusLineViewModel {
        title: strings.title.clone(),
        byline: format!("{} {}", strings.by, game.puzzle().author),
        date: display_date(game.puzzle_date(), &strings.date_format),
        time_label: strings.time.clone(),
        time: format_elapsed(app_state.elapsed(now)),
        backlog: strings.backlog(app_state.backlog),
        solved: game.status().is_solved(),
    }
}

#[must_use]
pub(crate) fn build_game_screen_view_model(
    app_state: &AppState,
    _ui_state: &UiState,
    now: Instant,
) -> GameScreenViewModel {
    let game = &app_state.game;
    GameScreenViewModel {
        status_line_vm: build_status_line_vm(app_state, now),
        grid_vm: build_grid_vm(game),
        clue_bar_vm: build_clue_bar_vm(game, &app_state.strings),
        keyboard_vm: KeyboardViewModel::new(
            game.locale().keyboard_layout(),
            !game.status().is_solved(),
        ),
    }
}

#[must_use]
pub(crate) fn build_modal_view_model<'a>(
    app_state: &'a AppState,
    ui_state: &'a UiState,
    time: &'a str,
) -> ModalViewModel<'a> {
    ModalViewModel {
        strings: &app_state.strings,
        time,
        share_text: ui_state.share_text.as_deref(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use bulmaca_core::{Position, Puzzle};
    use bulmaca_game::{CompletionPolicy, Direction, Game};

    use super::*;

    const PUZZLE: &str = "\
Author: Ada
Size: 3
AB-
CDE
-FG
H1: first across
H2: second across
H3: third across
V1: first down
V2: second down
V3: third down";

    fn game() -> Game {
        let puzzle = Puzzle::parse(PUZZLE).unwrap();
        Game::new(puzzle, "2026-02-03", CompletionPolicy::default()).unwrap()
    }

    fn white(
        vm: &GridViewModel,
        row: usize,
        col: usize,
    ) -> (Option<u32>, Option<char>, GridVisualState) {
        let cell = &vm.cells[Position::new(row, col)];
        match cell.content {
            GridCellContent::White { number, letter } => (number, letter, cell.visual_state),
            GridCellContent::Black => panic!("({row}, {col}) is black"),
        }
    }

    #[test]
    fn grid_marks_cursor_and_word() {
        let mut game = game();
        game.input_letter('a');
        let vm = build_grid_vm(&game);

        assert_eq!(vm.size(), 3);
        assert_eq!(vm.cells[Position::new(0, 2)].content, GridCellContent::Black);
        assert_eq!(white(&vm, 0, 0), (Some(1), Some('A'), GridVisualState::WORD));
        assert_eq!(
            white(&vm, 0, 1),
            (None, None, GridVisualState::WORD | GridVisualState::SELECTED)
        );
        assert_eq!(white(&vm, 1, 0), (Some(2), None, GridVisualState::empty()));
    }

    #[test]
    fn grid_numbers_follow_cursor_axis() {
        let mut game = game();
        game.toggle_axis();
        let vm = build_grid_vm(&game);
        // Down words start at (0,0), (0,1) and (1,2).
        assert_eq!(white(&vm, 0, 0).0, Some(1));
        assert_eq!(white(&vm, 0, 1).0, Some(2));
        assert_eq!(white(&vm, 1, 2).0, Some(3));
        assert_eq!(white(&vm, 1, 0).0, None);
        assert_eq!(white(&vm, 1, 0).2, GridVisualState::WORD);
    }

    #[test]
    fn clue_bar_labels_number_and_axis() {
        let mut game = game();
        let strings = Strings::default();
        assert_eq!(
            build_clue_bar_vm(&game, &strings),
            ClueBarViewModel::new("1A".to_owned(), "first across".to_owned())
        );

        game.move_cursor(Direction::Down);
        let turkish = Strings::for_language("tr");
        assert_eq!(
            build_clue_bar_vm(&game, &turkish),
            ClueBarViewModel::new("1D".to_owned(), "first down".to_owned())
        );
    }

    #[test]
    fn status_line_shows_header_and_clock() {
        let mut app_state = AppState::new(game(), Strings::default(), 2);
        let t0 = Instant::now();
        app_state.timer.start(t0);

        let vm = build_status_line_vm(&app_state, t0 + Duration::from_secs(61));
        assert_eq!(vm.byline, "by Ada");
        assert_eq!(vm.date, "February 3, 2026");
        assert_eq!(vm.time, "01:01");
        assert_eq!(
            vm.backlog.as_deref(),
            Some("2 more puzzles are ready for the coming days")
        );
        assert!(!vm.solved);
    }

    #[test]
    fn display_date_falls_back_to_raw_text() {
        assert_eq!(display_date("2026-02-03", "%d.%m.%Y"), "03.02.2026");
        assert_eq!(display_date("someday", "%d.%m.%Y"), "someday");
        assert_eq!(display_date("2026-02-03", "%Q"), "2026-02-03");
    }
}

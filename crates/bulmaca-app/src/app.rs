//! Bulmaca desktop application UI.
//!
//! # Design Notes
//! - One puzzle per run: the latest dated puzzle, or an explicit file.
//! - Keyboard-driven input (letters, arrows, backspace, space/tab) with
//!   mouse selection and an on-screen keyboard.
//! - The clock starts when the start modal is dismissed and stops when
//!   the puzzle is solved.

use std::time::{Duration, Instant};

use bulmaca_game::{Game, GameError, format_elapsed};
use eframe::{
    App, CreationContext, Frame,
    egui::{CentralPanel, Context},
};

use crate::{
    action::{self, ActionRequestQueue},
    config::AppConfig,
    localization::Strings,
    puzzle_source::{self, LoadError, PuzzleSource},
    state::{AppState, UiState},
    ui::{self, load_failure::LoadFailureViewModel},
    view_model_builder,
};

/// Errors that keep a session from starting.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum StartupError {
    #[display("{_0}")]
    Load(LoadError),
    #[display("{_0}")]
    Game(GameError),
}

#[derive(Debug)]
enum Screen {
    Playing {
        app_state: AppState,
        ui_state: UiState,
    },
    LoadFailed(LoadFailureViewModel),
}

#[derive(Debug)]
pub struct BulmacaApp {
    screen: Screen,
}

impl BulmacaApp {
    #[must_use]
    pub fn new(_cc: &CreationContext<'_>, config: &AppConfig) -> Self {
        Self::from_config(config)
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        let strings = Strings::for_language(&config.lang);
        let screen = match start_session(config) {
            Ok(game) => {
                let backlog =
                    PuzzleSource::new(&config.puzzle_dir, &config.lang).backlog(config.today);
                log::info!("{backlog} puzzle(s) ready after {}", config.today);
                Screen::Playing {
                    app_state: AppState::new(game, strings, backlog),
                    ui_state: UiState::new(),
                }
            }
            Err(err) => {
                log::error!("{err}");
                Screen::LoadFailed(LoadFailureViewModel {
                    title: strings.load_failed_title,
                    message: strings.load_failed_message,
                    detail: err.to_string(),
                })
            }
        };
        Self { screen }
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing { .. })
    }
}

/// Loads the configured puzzle and starts a game on it.
pub fn start_session(config: &AppConfig) -> Result<Game, StartupError> {
    let loaded = puzzle_source::load(config)?;
    let game = Game::new(loaded.puzzle, loaded.date, config.policy)?;
    Ok(game)
}

fn update_playing(ctx: &Context, app_state: &mut AppState, ui_state: &mut UiState) {
    let now = Instant::now();
    let mut action_queue = ActionRequestQueue::default();

    if ui_state.active_modal.is_none() {
        ctx.input(|i| ui::input::handle_input(i, &mut action_queue));
        action::handler::handle_all(app_state, ui_state, &mut action_queue, now);
    }

    let game_screen_vm = view_model_builder::build_game_screen_view_model(app_state, ui_state, now);

    CentralPanel::default().show(ctx, |ui| {
        ui::game_screen::show(ui, &game_screen_vm, &mut action_queue);
    });

    if let Some(kind) = ui_state.active_modal {
        let time = format_elapsed(app_state.elapsed(now));
        let modal_vm = view_model_builder::build_modal_view_model(app_state, ui_state, &time);
        ui::modal::show(ctx, &mut action_queue, kind, &modal_vm);
    }

    action::handler::handle_all(app_state, ui_state, &mut action_queue, now);

    if let Some(text) = ui_state.pending_clipboard.take() {
        ctx.copy_text(text);
    }
    if app_state.timer.is_running() {
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

impl App for BulmacaApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        match &mut self.screen {
            Screen::Playing {
                app_state,
                ui_state,
            } => update_playing(ctx, app_state, ui_state),
            Screen::LoadFailed(vm) => {
                CentralPanel::default().show(ctx, |ui| ui::load_failure::show(ui, vm));
            }
        }
    }
}

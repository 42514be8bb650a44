use std::time::Instant;

use bulmaca_game::{Effect, format_elapsed};

use crate::{
    action::{Action, ActionRequestQueue},
    share,
    state::{AppState, ModalKind, UiState},
};

#[derive(Debug)]
struct ActionContext<'a> {
    app_state: &'a mut AppState,
    ui_state: &'a mut UiState,
    now: Instant,
}

pub(crate) fn handle_all(
    app_state: &mut AppState,
    ui_state: &mut UiState,
    action_queue: &mut ActionRequestQueue,
    now: Instant,
) {
    for action in action_queue.take_all() {
        handle(app_state, ui_state, action, now);
    }
}

pub(crate) fn handle(app_state: &mut AppState, ui_state: &mut UiState, action: Action, now: Instant) {
    let mut ctx = ActionContext {
        app_state,
        ui_state,
        now,
    };

    let effects = match action {
        Action::InputLetter(c) => ctx.app_state.game.input_letter(c),
        Action::Backspace => ctx.app_state.game.backspace(),
        Action::MoveCursor(direction) => ctx.app_state.game.move_cursor(direction),
        Action::SelectCell(pos) => ctx.app_state.game.click_cell(pos),
        Action::ToggleAxis => ctx.app_state.game.toggle_axis(),
        Action::StartGame => {
            ctx.start_game();
            Vec::new()
        }
        Action::Share => {
            ctx.share();
            Vec::new()
        }
        Action::CloseModal => {
            ctx.ui_state.active_modal = None;
            Vec::new()
        }
    };

    for effect in effects {
        ctx.apply_effect(effect);
    }
}

impl ActionContext<'_> {
    fn start_game(&mut self) {
        self.app_state.timer.start(self.now);
        self.ui_state.active_modal = None;
        log::info!("game started");
    }

    fn share(&mut self) {
        let time = format_elapsed(self.app_state.elapsed(self.now));
        let text = share::share_text(&self.app_state.strings, &time);
        self.ui_state.pending_clipboard = Some(text.clone());
        self.ui_state.share_text = Some(text);
        self.ui_state.active_modal = Some(ModalKind::Share);
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PuzzleSolved => {
                self.app_state.timer.stop(self.now);
                log::info!(
                    "puzzle solved in {}",
                    format_elapsed(self.app_state.elapsed(self.now))
                );
                self.ui_state.active_modal = Some(ModalKind::Success);
            }
            Effect::MistakesRemain => {
                self.ui_state.active_modal = Some(ModalKind::Mistakes);
            }
            Effect::AnswerChanged(_) | Effect::CursorMoved(_) => {}
        }
    }
}

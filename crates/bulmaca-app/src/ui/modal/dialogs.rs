use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, TextEdit, Ui};

use super::ModalViewModel;
use crate::action::{Action, ActionRequestQueue};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn request_focus_if_none(ui: &Ui, response: &Response) {
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
}

fn primary_button(ui: &mut Ui, label: &str) -> Response {
    let response = ui.button(label);
    request_focus_if_none(ui, &response);
    response
}

// The start modal cannot be dismissed without starting the clock.
pub(crate) fn show_start(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    vm: &ModalViewModel<'_>,
) {
    let strings = vm.strings;
    let mut started = false;
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("start"),
        &strings.title,
        |ui: &mut Ui| {
            ui.label(&strings.ready_to_play);
        },
        |ui: &mut Ui| {
            started = primary_button(ui, &strings.start_game).clicked();
        },
    );

    if started || should_close {
        action_queue.request(Action::StartGame);
    }
}

pub(crate) fn show_success(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    vm: &ModalViewModel<'_>,
) {
    let strings = vm.strings;
    let mut share = false;
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("success"),
        &strings.success_title,
        |ui: &mut Ui| {
            ui.label(&strings.crossword_solved);
            ui.label(format!("{} {}", strings.you_finished_in, vm.time));
        },
        |ui: &mut Ui| {
            if primary_button(ui, &strings.success_ok).clicked() {
                ui.close();
            }
            share = ui.button(&strings.share).clicked();
        },
    );

    if share {
        action_queue.request(Action::Share);
    } else if should_close {
        action_queue.request(Action::CloseModal);
    }
}

pub(crate) fn show_mistakes(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    vm: &ModalViewModel<'_>,
) {
    let strings = vm.strings;
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("mistakes"),
        &strings.error_title,
        |ui: &mut Ui| {
            ui.label(&strings.oops_keep_trying);
            ui.label(&strings.still_mistakes);
        },
        |ui: &mut Ui| {
            if primary_button(ui, &strings.keep_going).clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(Action::CloseModal);
    }
}

pub(crate) fn show_share(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    vm: &ModalViewModel<'_>,
) {
    let strings = vm.strings;
    let DialogResult { should_close } = show_dialog(
        ctx,
        Id::new("share"),
        &strings.share,
        |ui: &mut Ui| {
            ui.label(&strings.share_text_copied);
            ui.add_space(4.0);
            ui.label(RichText::new(&strings.copy_text_to_share).weak());
            let mut text = vm.share_text.unwrap_or_default();
            ui.add(
                TextEdit::multiline(&mut text)
                    .desired_rows(3)
                    .desired_width(f32::INFINITY),
            );
        },
        |ui: &mut Ui| {
            if primary_button(ui, &strings.close).clicked() {
                ui.close();
            }
        },
    );

    if should_close {
        action_queue.request(Action::CloseModal);
    }
}

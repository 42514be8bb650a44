use eframe::egui::Context;

use crate::{action::ActionRequestQueue, localization::Strings, state::ModalKind};

mod dialogs;

#[derive(Debug, Clone, Copy)]
pub(crate) struct ModalViewModel<'a> {
    pub(crate) strings: &'a Strings,
    pub(crate) time: &'a str,
    pub(crate) share_text: Option<&'a str>,
}

pub(crate) fn show(
    ctx: &Context,
    action_queue: &mut ActionRequestQueue,
    kind: ModalKind,
    vm: &ModalViewModel<'_>,
) {
    match kind {
        ModalKind::Start => dialogs::show_start(ctx, action_queue, vm),
        ModalKind::Success => dialogs::show_success(ctx, action_queue, vm),
        ModalKind::Mistakes => dialogs::show_mistakes(ctx, action_queue, vm),
        ModalKind::Share => dialogs::show_share(ctx, action_queue, vm),
    }
}

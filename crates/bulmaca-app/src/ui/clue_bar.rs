use eframe::egui::{Frame, Label, RichText, Ui, Vec2, Widget as _};

use crate::ui::layout::{ComponentUnits, LayoutScale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClueBarViewModel {
    /// Clue number and axis letter, e.g. `3A`; empty for an unnumbered word.
    pub(crate) label: String,
    pub(crate) clue: String,
}

impl ClueBarViewModel {
    #[must_use]
    pub(crate) fn new(label: String, clue: String) -> Self {
        Self { label, clue }
    }
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 1.0)
}

pub(crate) fn show(ui: &mut Ui, vm: &ClueBarViewModel, scale: &LayoutScale) {
    let text_size = scale.cell_size * 0.4;
    Frame::group(ui.style())
        .fill(ui.visuals().faint_bg_color)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);
            ui.horizontal_wrapped(|ui| {
                if !vm.label.is_empty() {
                    Label::new(RichText::new(&vm.label).strong().size(text_size)).ui(ui);
                }
                Label::new(RichText::new(&vm.clue).size(text_size))
                    .wrap()
                    .ui(ui);
            });
        });
}

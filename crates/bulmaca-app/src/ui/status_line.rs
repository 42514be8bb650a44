use eframe::egui::{Align, Label, Layout, RichText, Ui, Vec2, Widget as _};

use crate::ui::layout::{ComponentUnits, LayoutScale};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusLineViewModel {
    pub(crate) title: String,
    pub(crate) byline: String,
    pub(crate) date: String,
    pub(crate) time_label: String,
    pub(crate) time: String,
    pub(crate) backlog: Option<String>,
    pub(crate) solved: bool,
}

#[must_use]
pub(crate) fn required_units() -> ComponentUnits {
    ComponentUnits::new(0.0, 1.6)
}

pub(crate) fn show(ui: &mut Ui, vm: &StatusLineViewModel, scale: &LayoutScale) {
    let cell_size = scale.cell_size;
    ui.spacing_mut().item_spacing = Vec2::new(scale.spacing.x, 0.0);

    ui.horizontal(|ui| {
        Label::new(RichText::new(&vm.title).strong().size(cell_size * 0.5)).ui(ui);
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let color = if vm.solved {
                ui.visuals().warn_fg_color
            } else {
                ui.visuals().text_color()
            };
            Label::new(
                RichText::new(format!("{} {}", vm.time_label, vm.time))
                    .monospace()
                    .color(color)
                    .size(cell_size * 0.4),
            )
            .ui(ui);
        });
    });
    ui.horizontal(|ui| {
        Label::new(RichText::new(&vm.byline).size(cell_size * 0.3)).ui(ui);
        Label::new(RichText::new(&vm.date).weak().size(cell_size * 0.3)).ui(ui);
    });
    if let Some(backlog) = &vm.backlog {
        Label::new(RichText::new(backlog).small().weak()).ui(ui);
    }
}

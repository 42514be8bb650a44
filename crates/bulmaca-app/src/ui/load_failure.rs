use eframe::egui::{RichText, Ui};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LoadFailureViewModel {
    pub(crate) title: String,
    pub(crate) message: String,
    pub(crate) detail: String,
}

pub(crate) fn show(ui: &mut Ui, vm: &LoadFailureViewModel) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.3);
        ui.heading(RichText::new(&vm.title).color(ui.visuals().error_fg_color));
        ui.add_space(8.0);
        ui.label(&vm.message);
        ui.add_space(4.0);
        ui.label(RichText::new(&vm.detail).monospace().weak());
    });
}

use eframe::egui::Ui;
use egui_extras::{Size, StripBuilder};

use super::{clue_bar, grid, keyboard, status_line};
use crate::{
    action::ActionRequestQueue,
    ui::{
        clue_bar::ClueBarViewModel, grid::GridViewModel, keyboard::KeyboardViewModel,
        layout::LayoutScale, status_line::StatusLineViewModel,
    },
};

#[derive(Debug, Clone)]
pub(crate) struct GameScreenViewModel {
    pub(crate) status_line_vm: StatusLineViewModel,
    pub(crate) grid_vm: GridViewModel,
    pub(crate) clue_bar_vm: ClueBarViewModel,
    pub(crate) keyboard_vm: KeyboardViewModel,
}

pub(crate) fn show(ui: &mut Ui, vm: &GameScreenViewModel, action_queue: &mut ActionRequestQueue) {
    let status_units = status_line::required_units();
    let grid_units = grid::required_units(vm.grid_vm.size());
    let clue_units = clue_bar::required_units();
    let keyboard_units = keyboard::required_units(&vm.keyboard_vm);
    let total = status_units
        .stack(grid_units)
        .stack(clue_units)
        .stack(keyboard_units);

    let scale = LayoutScale::fit(ui.available_size(), total, 3.0);
    let cell_size = scale.cell_size;
    let width = total.width * cell_size;

    StripBuilder::new(ui)
        .size(Size::remainder())
        .size(Size::exact(width))
        .size(Size::remainder())
        .horizontal(|mut strip| {
            strip.empty();
            strip.cell(|ui| {
                StripBuilder::new(ui)
                    .size(Size::remainder())
                    .size(Size::exact(status_units.height * cell_size))
                    .size(Size::exact(scale.spacing.y))
                    .size(Size::exact(grid_units.height * cell_size))
                    .size(Size::exact(scale.spacing.y))
                    .size(Size::exact(clue_units.height * cell_size))
                    .size(Size::exact(scale.spacing.y))
                    .size(Size::exact(keyboard_units.height * cell_size))
                    .size(Size::remainder())
                    .vertical(|mut strip| {
                        strip.empty();
                        strip.cell(|ui| {
                            status_line::show(ui, &vm.status_line_vm, &scale);
                        });
                        strip.empty();
                        strip.cell(|ui| {
                            grid::show(ui, &vm.grid_vm, &scale, action_queue);
                        });
                        strip.empty();
                        strip.cell(|ui| {
                            clue_bar::show(ui, &vm.clue_bar_vm, &scale);
                        });
                        strip.empty();
                        strip.cell(|ui| {
                            keyboard::show(ui, &vm.keyboard_vm, &scale, action_queue);
                        });
                        strip.empty();
                    });
            });
            strip.empty();
        });
}

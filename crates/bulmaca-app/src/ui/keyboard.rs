use eframe::egui::{Button, RichText, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::layout::{ComponentUnits, LayoutScale},
};

const BACKSPACE_LABEL: &str = "⌫";
const KEY_HEIGHT_UNITS: f32 = 0.8;

#[derive(Debug, Clone, Copy)]
pub(crate) struct KeyboardViewModel {
    rows: &'static [&'static [char]],
    enabled: bool,
}

impl KeyboardViewModel {
    #[must_use]
    pub(crate) fn new(rows: &'static [&'static [char]], enabled: bool) -> Self {
        Self { rows, enabled }
    }

    /// Keys in the widest row, counting the backspace key on the last one.
    fn max_keys(&self) -> usize {
        let last = self.rows.len().saturating_sub(1);
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| row.len() + usize::from(i == last))
            .max()
            .unwrap_or(1)
    }
}

#[must_use]
pub(crate) fn required_units(vm: &KeyboardViewModel) -> ComponentUnits {
    #[expect(clippy::cast_precision_loss)]
    let rows = vm.rows.len() as f32;
    ComponentUnits::new(0.0, rows * KEY_HEIGHT_UNITS)
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &KeyboardViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let gap = scale.spacing.x * 0.3;
    ui.spacing_mut().item_spacing = Vec2::splat(gap);

    #[expect(clippy::cast_precision_loss)]
    let max_keys = vm.max_keys() as f32;
    let key_width = ((ui.available_width() - gap * (max_keys - 1.0)) / max_keys).max(1.0);
    let key_size = Vec2::new(key_width, scale.cell_size * KEY_HEIGHT_UNITS - gap);
    let text_size = key_size.y.min(key_width) * 0.5;

    let last = vm.rows.len().saturating_sub(1);
    for (i, row) in vm.rows.iter().enumerate() {
        let keys = row.len() + usize::from(i == last);
        #[expect(clippy::cast_precision_loss)]
        let row_width = keys as f32 * (key_width + gap) - gap;
        let indent = ((ui.available_width() - row_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(indent);
            for &key in *row {
                let button = Button::new(RichText::new(key.to_string()).size(text_size))
                    .min_size(key_size);
                if ui.add_enabled(vm.enabled, button).clicked() {
                    action_queue.request(Action::InputLetter(key));
                }
            }
            if i == last {
                let button = Button::new(RichText::new(BACKSPACE_LABEL).size(text_size))
                    .min_size(key_size);
                if ui.add_enabled(vm.enabled, button).clicked() {
                    action_queue.request(Action::Backspace);
                }
            }
        });
    }
}

use eframe::egui::{Color32, Visuals};

/// Color palette for crossword grid rendering.
///
/// Independent from `egui::Visuals` so the grid's own semantics (black
/// cells, current word, cursor) can be tuned apart from the global theme.
#[derive(Debug, Clone)]
pub struct GridPalette {
    pub cell_bg_default: Color32,
    pub cell_bg_black: Color32,
    pub cell_bg_word: Color32,
    pub cell_bg_selected: Color32,

    pub border_inactive: Color32,
    pub border_selected: Color32,

    pub text_letter: Color32,
    pub text_number: Color32,
}

impl GridPalette {
    /// Builds the palette from the current visuals.
    #[must_use]
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let cell_bg_black = if visuals.dark_mode {
            Color32::from_gray(10)
        } else {
            Color32::from_gray(24)
        };

        Self {
            cell_bg_default: visuals.text_edit_bg_color(),
            cell_bg_black,
            cell_bg_word: visuals.widgets.hovered.bg_fill,
            cell_bg_selected: visuals.selection.bg_fill,

            border_inactive: visuals.widgets.inactive.fg_stroke.color,
            border_selected: visuals.selection.stroke.color,

            text_letter: visuals.strong_text_color(),
            text_number: visuals.weak_text_color(),
        }
    }
}

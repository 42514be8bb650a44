use bulmaca_core::{Position, containers::CellArray};
use eframe::egui::{Align2, Color32, FontId, Painter, Rect, Sense, Stroke, StrokeKind, Ui, Vec2};

use crate::{
    action::{Action, ActionRequestQueue},
    ui::{
        grid_theme::GridPalette,
        layout::{ComponentUnits, LayoutScale},
    },
};

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(crate) struct GridVisualState: u8 {
        const SELECTED = 0b0000_0001;
        const WORD = 0b0000_0010;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum GridCellContent {
    Black,
    White {
        number: Option<u32>,
        letter: Option<char>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GridCell {
    pub(crate) content: GridCellContent,
    pub(crate) visual_state: GridVisualState,
}

#[derive(Debug, Clone)]
pub(crate) struct GridViewModel {
    pub(crate) cells: CellArray<GridCell>,
}

impl GridViewModel {
    #[must_use]
    pub(crate) fn new(cells: CellArray<GridCell>) -> Self {
        Self { cells }
    }

    #[must_use]
    pub(crate) fn size(&self) -> usize {
        self.cells.size()
    }
}

const BORDER_WIDTH_BASE_RATIO: f32 = 0.03;
const OUTER_BORDER_WIDTH_RATIO: f32 = 3.0;
const SELECTED_BORDER_WIDTH_RATIO: f32 = 3.0;
const NUMBER_FONT_RATIO: f32 = 0.28;
const LETTER_FONT_RATIO: f32 = 0.6;

#[must_use]
pub(crate) fn required_units(size: usize) -> ComponentUnits {
    #[expect(clippy::cast_precision_loss)]
    let cells = size as f32;
    let len = cells + BORDER_WIDTH_BASE_RATIO * OUTER_BORDER_WIDTH_RATIO * 2.0;
    ComponentUnits::new(len, len)
}

fn base_border_width(cell_size: f32) -> f32 {
    f32::max(cell_size * BORDER_WIDTH_BASE_RATIO, 1.0)
}

impl GridVisualState {
    fn cell_fill_color(self, palette: &GridPalette) -> Color32 {
        if self.intersects(Self::SELECTED) {
            return palette.cell_bg_selected;
        }
        if self.intersects(Self::WORD) {
            return palette.cell_bg_word;
        }
        palette.cell_bg_default
    }

    fn cell_border(self, palette: &GridPalette, cell_size: f32) -> Stroke {
        let base = base_border_width(cell_size);
        if self.intersects(Self::SELECTED) {
            Stroke::new(base * SELECTED_BORDER_WIDTH_RATIO, palette.border_selected)
        } else {
            Stroke::new(base, palette.border_inactive)
        }
    }
}

pub(crate) fn show(
    ui: &mut Ui,
    vm: &GridViewModel,
    scale: &LayoutScale,
    action_queue: &mut ActionRequestQueue,
) {
    let cell_size = scale.cell_size;
    let palette = &GridPalette::from_visuals(ui.visuals());

    let outer = Stroke::new(
        base_border_width(cell_size) * OUTER_BORDER_WIDTH_RATIO,
        palette.border_inactive,
    );
    #[expect(clippy::cast_precision_loss)]
    let side = vm.size() as f32 * cell_size + outer.width * 2.0;
    let (rect, _response) = ui.allocate_exact_size(Vec2::splat(side), Sense::hover());
    let inner_rect = rect.shrink(outer.width);

    let painter = ui.painter();
    for (pos, cell) in vm.cells.iter() {
        let cell_rect = cell_rect(inner_rect, pos, cell_size);
        draw_cell(painter, cell_rect, cell, palette, cell_size);

        if matches!(cell.content, GridCellContent::White { .. }) {
            let response = ui.interact(cell_rect, ui.id().with((pos.row, pos.col)), Sense::click());
            if response.clicked() {
                action_queue.request(Action::SelectCell(pos));
            }
        }
    }

    painter.rect_stroke(rect.shrink(outer.width / 2.0), 0.0, outer, StrokeKind::Middle);
}

fn cell_rect(inner_rect: Rect, pos: Position, cell_size: f32) -> Rect {
    #[expect(clippy::cast_precision_loss)]
    let (x, y) = (pos.col as f32, pos.row as f32);
    let min = inner_rect.min + Vec2::new(cell_size * x, cell_size * y);
    Rect::from_min_size(min, Vec2::splat(cell_size))
}

fn draw_cell(
    painter: &Painter,
    rect: Rect,
    cell: &GridCell,
    palette: &GridPalette,
    cell_size: f32,
) {
    let GridCellContent::White { number, letter } = cell.content else {
        painter.rect_filled(rect, 0.0, palette.cell_bg_black);
        painter.rect_stroke(
            rect,
            0.0,
            Stroke::new(base_border_width(cell_size), palette.border_inactive),
            StrokeKind::Inside,
        );
        return;
    };

    let vs = cell.visual_state;
    painter.rect_filled(rect, 0.0, vs.cell_fill_color(palette));

    if let Some(number) = number {
        let inset = base_border_width(cell_size) * 2.0;
        painter.text(
            rect.min + Vec2::splat(inset),
            Align2::LEFT_TOP,
            number.to_string(),
            FontId::proportional(cell_size * NUMBER_FONT_RATIO),
            palette.text_number,
        );
    }
    if let Some(letter) = letter {
        painter.text(
            rect.center() + Vec2::new(0.0, cell_size * 0.06),
            Align2::CENTER_CENTER,
            letter,
            FontId::proportional(cell_size * LETTER_FONT_RATIO),
            palette.text_letter,
        );
    }

    painter.rect_stroke(
        rect,
        0.0,
        vs.cell_border(palette, cell_size),
        StrokeKind::Inside,
    );
}

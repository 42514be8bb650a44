use eframe::egui::Vec2;

#[derive(Debug, Clone, Copy)]
pub(crate) struct LayoutScale {
    pub(crate) cell_size: f32,
    pub(crate) spacing: Vec2,
}

impl LayoutScale {
    pub(crate) const SPACING_FACTOR: Vec2 = Vec2::new(0.15, 0.20);

    #[must_use]
    pub(crate) fn new(cell_size: f32) -> Self {
        let spacing = Vec2::splat(cell_size) * Self::SPACING_FACTOR;
        Self { cell_size, spacing }
    }

    /// Largest scale at which `units` (plus spacing between `gaps`
    /// components) fits into `available`.
    #[must_use]
    pub(crate) fn fit(available: Vec2, units: ComponentUnits, gaps: f32) -> Self {
        let width = available.x / (units.width + Self::SPACING_FACTOR.x * 2.0);
        let height = available.y / (units.height + Self::SPACING_FACTOR.y * (gaps + 2.0));
        Self::new(width.min(height).max(1.0))
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ComponentUnits {
    pub(crate) width: f32,
    pub(crate) height: f32,
}

impl ComponentUnits {
    #[must_use]
    pub(crate) const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Stacks `self` on top of `other`.
    #[must_use]
    pub(crate) fn stack(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height + other.height,
        }
    }
}

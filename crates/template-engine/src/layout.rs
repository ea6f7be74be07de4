//! Canvas layout: margins derived from label metrics.

use tracing::debug;

use crate::font::LabelFont;
use crate::grid::GridSpec;

/// Space between the widest/tallest label and the grid edge.
pub(crate) const PADDING_GAP: u32 = 10;

/// Space between each individual label and the grid edge.
pub(crate) const LABEL_GUTTER: i32 = 5;

/// Computed placement of the block-scaled grid inside the output canvas.
///
/// The left margin fits the widest row label and the top margin the tallest
/// column label, so no label clips however many digits the largest index
/// has.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateLayout {
    pub padding_left: u32,
    pub padding_top: u32,
    pub grid_w: u32,
    pub grid_h: u32,
}

impl TemplateLayout {
    pub fn compute(font: &LabelFont, grid: &GridSpec, block_size: u32, font_px: f32) -> Self {
        let max_row_label_w = (1..=grid.height)
            .map(|i| font.measure(&i.to_string(), font_px).0)
            .max()
            .unwrap_or(0);
        let max_col_label_h = (1..=grid.width)
            .map(|i| font.measure(&i.to_string(), font_px).1)
            .max()
            .unwrap_or(0);

        let layout = Self {
            padding_left: max_row_label_w + PADDING_GAP,
            padding_top: max_col_label_h + PADDING_GAP,
            grid_w: grid.width * block_size,
            grid_h: grid.height * block_size,
        };
        debug!(
            padding_left = layout.padding_left,
            padding_top = layout.padding_top,
            grid_w = layout.grid_w,
            grid_h = layout.grid_h,
            "Computed template layout"
        );
        layout
    }

    pub fn canvas_width(&self) -> u32 {
        self.grid_w + self.padding_left
    }

    pub fn canvas_height(&self) -> u32 {
        self.grid_h + self.padding_top
    }
}

//! The template renderer.
//!
//! Turns a photo into a printable crochet chart: bilinear downsample to the
//! target cell grid, hard-edged block upscale, then gridlines and numeric
//! row/column labels composed onto a white canvas with metric-driven
//! margins.

use image::imageops::FilterType;
use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::error::TemplateError;
use crate::font::LabelFont;
use crate::grid::GridSpec;
use crate::layout::{LABEL_GUTTER, TemplateLayout};

/// Default per-cell rendering scale in output pixels.
pub const DEFAULT_BLOCK_SIZE: u32 = 5;

/// Label pixel height relative to the block size.
const FONT_SIZE_RATIO: f32 = 1.5;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GRAY: Rgba<u8> = Rgba([128, 128, 128, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Renders pixel-art grid templates.
///
/// Holds the label font as a shared immutable resource; `render` itself is
/// pure, so one renderer can serve concurrent callers.
pub struct TemplateRenderer {
    font: LabelFont,
}

impl TemplateRenderer {
    pub fn new(font: LabelFont) -> Self {
        Self { font }
    }

    /// Renderer with the standard font resolution (system font if present,
    /// otherwise the built-in digit face).
    pub fn with_default_font() -> Self {
        Self::new(LabelFont::load(None))
    }

    pub fn font(&self) -> &LabelFont {
        &self.font
    }

    /// Render `image` as a `grid.width x grid.height` template where each
    /// cell is a solid `block_size` square.
    ///
    /// Identical inputs produce pixel-identical output.
    pub fn render(
        &self,
        image: &DynamicImage,
        grid: &GridSpec,
        block_size: u32,
    ) -> Result<RgbaImage, TemplateError> {
        if grid.width == 0 || grid.height == 0 {
            return Err(TemplateError::InvalidGrid {
                width: grid.width,
                height: grid.height,
            });
        }
        if block_size == 0 {
            return Err(TemplateError::InvalidBlockSize);
        }
        // Very large grids are not capped, but the scaled extent must still
        // fit pixel coordinates.
        let (scaled_w, scaled_h) = grid
            .width
            .checked_mul(block_size)
            .zip(grid.height.checked_mul(block_size))
            .ok_or(TemplateError::GridTooLarge {
                width: grid.width,
                height: grid.height,
                block_size,
            })?;

        // Each cell's color is the area-weighted average of the source
        // pixels it covers.
        let small = image.resize_exact(grid.width, grid.height, FilterType::Triangle);
        // Hard-edged upscale: every cell becomes one solid block.
        let scaled = small.resize_exact(scaled_w, scaled_h, FilterType::Nearest);
        debug!(
            src_w = image.width(),
            src_h = image.height(),
            grid_w = scaled.width(),
            grid_h = scaled.height(),
            block_size,
            "Block-scaled grid"
        );

        let font_px = block_size as f32 * FONT_SIZE_RATIO;
        let layout = TemplateLayout::compute(&self.font, grid, block_size, font_px);

        let mut canvas =
            RgbaImage::from_pixel(layout.canvas_width(), layout.canvas_height(), WHITE);
        paste(&mut canvas, &scaled, layout.padding_left, layout.padding_top);

        draw_lattice(&mut canvas, &layout, block_size);
        self.draw_labels(&mut canvas, grid, &layout, block_size, font_px);

        Ok(canvas)
    }

    fn draw_labels(
        &self,
        canvas: &mut RgbaImage,
        grid: &GridSpec,
        layout: &TemplateLayout,
        block_size: u32,
        font_px: f32,
    ) {
        let block = block_size as i32;

        // Row labels: right-aligned before the grid, centered on the cell band
        for i in 0..grid.height {
            let text = (i + 1).to_string();
            let (w, h) = self.font.measure(&text, font_px);
            let x = layout.padding_left as i32 - w as i32 - LABEL_GUTTER;
            let y = i as i32 * block + layout.padding_top as i32 + (block - h as i32) / 2;
            self.font.draw(canvas, x, y, font_px, BLACK, &text);
        }

        // Column labels: above the grid, centered on the cell band
        for i in 0..grid.width {
            let text = (i + 1).to_string();
            let (w, h) = self.font.measure(&text, font_px);
            let x = i as i32 * block + layout.padding_left as i32 + (block - w as i32) / 2;
            let y = layout.padding_top as i32 - h as i32 - LABEL_GUTTER;
            self.font.draw(canvas, x, y, font_px, BLACK, &text);
        }
    }
}

fn paste(canvas: &mut RgbaImage, img: &DynamicImage, x: u32, y: u32) {
    let rgba = img.to_rgba8();
    for (dx, dy, pixel) in rgba.enumerate_pixels() {
        if x + dx < canvas.width() && y + dy < canvas.height() {
            canvas.put_pixel(x + dx, y + dy, *pixel);
        }
    }
}

/// Gray line at every cell boundary, outer border included. Boundaries that
/// land past the canvas edge are clipped, matching the padded geometry.
fn draw_lattice(canvas: &mut RgbaImage, layout: &TemplateLayout, block_size: u32) {
    for x in (0..=layout.grid_w).step_by(block_size as usize) {
        draw_vline(canvas, x + layout.padding_left, layout.padding_top);
    }
    for y in (0..=layout.grid_h).step_by(block_size as usize) {
        draw_hline(canvas, y + layout.padding_top, layout.padding_left);
    }
}

fn draw_vline(canvas: &mut RgbaImage, x: u32, from_y: u32) {
    if x >= canvas.width() {
        return;
    }
    for y in from_y..canvas.height() {
        canvas.put_pixel(x, y, GRAY);
    }
}

fn draw_hline(canvas: &mut RgbaImage, y: u32, from_x: u32) {
    if y >= canvas.height() {
        return;
    }
    for x in from_x..canvas.width() {
        canvas.put_pixel(x, y, GRAY);
    }
}

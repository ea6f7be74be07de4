//! Label font resolution and glyph rendering.
//!
//! Resolution order: a caller-preferred font file, then platform system
//! fonts, then a built-in bitmap digit face. The built-in face means font
//! resolution can never fail, whatever the host has installed.

use std::path::Path;

use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use tracing::info;

/// 5x7 bitmap glyphs for the digits 0-9, one byte per row, low 5 bits used.
const DIGIT_ROWS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
];

const BITMAP_GLYPH_W: u32 = 5;
const BITMAP_GLYPH_H: u32 = 7;

enum Face {
    Vector(FontVec),
    Bitmap,
}

/// Font used for the numeric row/column labels.
///
/// Loaded once and held immutably by the renderer; safe to share across
/// threads.
pub struct LabelFont {
    face: Face,
}

impl LabelFont {
    /// Resolve a label font: the preferred file if given and parseable, then
    /// platform system fonts, then the built-in digit face.
    pub fn load(preferred: Option<&Path>) -> Self {
        if let Some(path) = preferred {
            if let Some(font) = load_vector(path) {
                return Self {
                    face: Face::Vector(font),
                };
            }
            info!(path = %path.display(), "Preferred label font unavailable, falling back");
        }

        for path in system_font_candidates() {
            if let Some(font) = load_vector(Path::new(path)) {
                info!(path, "Using system font for grid labels");
                return Self {
                    face: Face::Vector(font),
                };
            }
        }

        info!("No vector font available, using built-in digit face");
        Self::builtin()
    }

    /// The built-in bitmap digit face. Deterministic across hosts, so tests
    /// use it directly.
    pub fn builtin() -> Self {
        Self { face: Face::Bitmap }
    }

    /// Tight rendered bounding box of `text` at `px` pixels height.
    pub fn measure(&self, text: &str, px: f32) -> (u32, u32) {
        match &self.face {
            Face::Vector(font) => {
                let (width, height, _) = vector_extent(font, px, text);
                (width, height)
            }
            Face::Bitmap => bitmap_extent(text, px),
        }
    }

    /// Draw `text` with the tight bounding box's top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the canvas are clipped.
    pub fn draw(&self, canvas: &mut RgbaImage, x: i32, y: i32, px: f32, color: Rgba<u8>, text: &str) {
        match &self.face {
            Face::Vector(font) => {
                let (_, _, top) = vector_extent(font, px, text);
                draw_text_mut(canvas, color, x, y - top, PxScale::from(px), font, text);
            }
            Face::Bitmap => draw_bitmap_text(canvas, x, y, px, color, text),
        }
    }
}

fn load_vector(path: &Path) -> Option<FontVec> {
    let data = std::fs::read(path).ok()?;
    FontVec::try_from_vec(data).ok()
}

/// Advance width, tight height, and tight-top offset of `text` laid out the
/// way `draw_text_mut` positions glyphs (baseline at the font ascent).
fn vector_extent(font: &FontVec, px: f32, text: &str) -> (u32, u32, i32) {
    let scale = PxScale::from(px);
    let scaled = font.as_scaled(scale);

    let mut advance = 0.0f32;
    let mut top = f32::MAX;
    let mut bottom = f32::MIN;
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            advance += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(advance, scaled.ascent()));
        if let Some(outline) = font.outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            top = top.min(bounds.min.y);
            bottom = bottom.max(bounds.max.y);
        }
        advance += scaled.h_advance(id);
        prev = Some(id);
    }

    if top > bottom {
        // Nothing outlined (e.g. all whitespace)
        return (advance.ceil() as u32, 0, 0);
    }
    (
        advance.ceil() as u32,
        (bottom - top).ceil() as u32,
        top.floor() as i32,
    )
}

/// Integer cell size for the bitmap face at the requested pixel height.
fn bitmap_cell(px: f32) -> u32 {
    ((px / BITMAP_GLYPH_H as f32).round() as u32).max(1)
}

fn bitmap_extent(text: &str, px: f32) -> (u32, u32) {
    let cell = bitmap_cell(px);
    let glyphs = text.chars().count() as u32;
    if glyphs == 0 {
        return (0, 0);
    }
    // One cell of spacing between glyphs
    let width = glyphs * BITMAP_GLYPH_W * cell + (glyphs - 1) * cell;
    (width, BITMAP_GLYPH_H * cell)
}

fn draw_bitmap_text(canvas: &mut RgbaImage, x: i32, y: i32, px: f32, color: Rgba<u8>, text: &str) {
    let cell = bitmap_cell(px);
    let mut glyph_x = x;

    for ch in text.chars() {
        if let Some(digit) = ch.to_digit(10) {
            draw_bitmap_glyph(canvas, glyph_x, y, cell, color, &DIGIT_ROWS[digit as usize]);
        }
        glyph_x += ((BITMAP_GLYPH_W + 1) * cell) as i32;
    }
}

fn draw_bitmap_glyph(canvas: &mut RgbaImage, x: i32, y: i32, cell: u32, color: Rgba<u8>, rows: &[u8; 7]) {
    for (row, bits) in rows.iter().enumerate() {
        for col in 0..BITMAP_GLYPH_W {
            if bits & (1 << (BITMAP_GLYPH_W - 1 - col)) == 0 {
                continue;
            }
            let px0 = x + (col * cell) as i32;
            let py0 = y + (row as u32 * cell) as i32;
            for dy in 0..cell as i32 {
                for dx in 0..cell as i32 {
                    let (cx, cy) = (px0 + dx, py0 + dy);
                    if cx >= 0 && cy >= 0 && (cx as u32) < canvas.width() && (cy as u32) < canvas.height() {
                        canvas.put_pixel(cx as u32, cy as u32, color);
                    }
                }
            }
        }
    }
}

fn system_font_candidates() -> &'static [&'static str] {
    #[cfg(target_os = "macos")]
    {
        &[
            "/System/Library/Fonts/Supplemental/Arial.ttf",
            "/System/Library/Fonts/Supplemental/Helvetica.ttf",
        ]
    }
    #[cfg(target_os = "windows")]
    {
        &["C:\\Windows\\Fonts\\arial.ttf"]
    }
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        &[
            "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/usr/share/fonts/TTF/DejaVuSans.ttf",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

    #[test]
    fn builtin_measures_digits() {
        let font = LabelFont::builtin();
        // px 7 -> cell 1
        assert_eq!(font.measure("1", 7.0), (5, 7));
        assert_eq!(font.measure("12", 7.0), (11, 7));
        assert_eq!(font.measure("123", 7.0), (17, 7));
    }

    #[test]
    fn builtin_scales_with_pixel_height() {
        let font = LabelFont::builtin();
        assert_eq!(font.measure("1", 14.0), (10, 14));
    }

    #[test]
    fn builtin_empty_text_is_zero_sized() {
        let font = LabelFont::builtin();
        assert_eq!(font.measure("", 7.0), (0, 0));
    }

    #[test]
    fn builtin_draw_fills_tight_box() {
        let font = LabelFont::builtin();
        let mut canvas = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
        font.draw(&mut canvas, 2, 3, 7.0, BLACK, "8");

        // "8" has ink on every row of its 5x7 box
        let mut inked_rows = 0;
        for row in 0..7 {
            if (0..5).any(|col| canvas.get_pixel(2 + col, 3 + row) == &BLACK) {
                inked_rows += 1;
            }
        }
        assert_eq!(inked_rows, 7);
        // Nothing outside the box
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.get_pixel(8, 3), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn builtin_draw_clips_at_canvas_edges() {
        let font = LabelFont::builtin();
        let mut canvas = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        // Partially negative and partially past the edge; must not panic
        font.draw(&mut canvas, -2, -2, 7.0, BLACK, "88");
        font.draw(&mut canvas, 3, 3, 7.0, BLACK, "8");
    }

    #[test]
    fn load_never_fails() {
        // Whatever fonts the host has, resolution ends in a usable face.
        let font = LabelFont::load(Some(Path::new("/nonexistent/font.ttf")));
        let (w, h) = font.measure("42", 12.0);
        assert!(w > 0);
        assert!(h > 0);
    }
}

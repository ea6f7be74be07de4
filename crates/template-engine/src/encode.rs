//! PNG encoding for template download and display.

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

use crate::error::TemplateError;

/// Fixed filename offered for template downloads.
pub const TEMPLATE_FILE_NAME: &str = "pixel_art_template.png";

/// MIME type of the encoded template.
pub const TEMPLATE_MIME: &str = "image/png";

/// Encode a rendered template as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, TemplateError> {
    let mut buf = Cursor::new(Vec::new());
    image
        .write_to(&mut buf, ImageFormat::Png)
        .map_err(TemplateError::Encode)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::LabelFont;
    use crate::grid::GridSpec;
    use crate::render::TemplateRenderer;
    use image::{DynamicImage, Rgba};

    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn encoded_bytes_start_with_png_magic() {
        let img = RgbaImage::from_pixel(10, 10, Rgba([255, 255, 255, 255]));
        let bytes = encode_png(&img).unwrap();
        assert_eq!(&bytes[0..8], &PNG_MAGIC);
    }

    #[test]
    fn rendered_template_round_trips_through_png() {
        let renderer = TemplateRenderer::new(LabelFont::builtin());
        let src = DynamicImage::ImageRgba8(RgbaImage::from_pixel(40, 40, Rgba([80, 40, 20, 255])));
        let template = renderer
            .render(&src, &GridSpec::new(4, 4).unwrap(), 5)
            .unwrap();

        let bytes = encode_png(&template).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(decoded.as_raw(), template.as_raw());
    }
}

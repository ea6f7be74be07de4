//! EXIF orientation normalization.
//!
//! Photos carry an embedded orientation tag describing how the camera was
//! held at capture time; the renderer expects an upright raster. Missing or
//! malformed metadata falls back to the image as decoded.

use std::io::Cursor;

use image::DynamicImage;
use tracing::debug;

use crate::error::TemplateError;

/// Clockwise rotation needed to display an image upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Upright,
    Rotate90,
    Rotate180,
    Rotate270,
}

impl Orientation {
    /// Map a raw EXIF orientation code to the required correction.
    ///
    /// Codes 3/6/8 are the rotated variants. The mirrored codes (2, 4, 5, 7)
    /// and out-of-range values are treated as upright.
    pub fn from_exif_code(code: u16) -> Self {
        match code {
            3 => Self::Rotate180,
            6 => Self::Rotate90,
            8 => Self::Rotate270,
            _ => Self::Upright,
        }
    }
}

/// Read the EXIF orientation tag from encoded image bytes.
///
/// Returns `None` when the container has no EXIF segment, the tag is absent,
/// or its value has the wrong shape.
pub fn read_orientation(data: &[u8]) -> Option<Orientation> {
    let mut cursor = Cursor::new(data);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    let field = exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)?;
    let code = field.value.get_uint(0)?;
    Some(Orientation::from_exif_code(code as u16))
}

/// Rotate an image so it displays upright.
///
/// 90/270 rotations swap width and height (the canvas expands to fit).
pub fn apply(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Upright => img,
        Orientation::Rotate90 => img.rotate90(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::Rotate270 => img.rotate270(),
    }
}

/// Decode an uploaded JPEG/PNG and normalize its orientation.
pub fn load_upright(data: &[u8]) -> Result<DynamicImage, TemplateError> {
    let img = image::load_from_memory(data).map_err(TemplateError::Decode)?;
    match read_orientation(data) {
        Some(orientation) if orientation != Orientation::Upright => {
            debug!(?orientation, "Applying EXIF orientation correction");
            Ok(apply(img, orientation))
        }
        _ => Ok(img),
    }
}

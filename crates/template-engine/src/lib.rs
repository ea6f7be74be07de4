//! Pixel-art template generation for crochet charts.
//!
//! Provides EXIF orientation normalization, the grid template renderer
//! (bilinear downsample, hard-edged block upscale, gridlines, numeric
//! row/column labels), and PNG encoding for download.

pub mod encode;
pub mod error;
pub mod font;
pub mod grid;
pub mod layout;
pub mod orientation;
pub mod render;

// Re-exports for convenience
pub use encode::{TEMPLATE_FILE_NAME, TEMPLATE_MIME, encode_png};
pub use error::TemplateError;
pub use font::LabelFont;
pub use grid::GridSpec;
pub use orientation::{Orientation, load_upright, read_orientation};
pub use render::{DEFAULT_BLOCK_SIZE, TemplateRenderer};

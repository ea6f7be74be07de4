//! Error types for template generation.

use thiserror::Error;

/// Errors surfaced to the host for a single render request.
///
/// Recoverable conditions (missing EXIF data, unavailable preferred font)
/// never appear here; those fall back silently.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("grid dimensions must be positive (got {width}x{height})")]
    InvalidGrid { width: u32, height: u32 },

    #[error("block size must be positive")]
    InvalidBlockSize,

    #[error("grid too large to render ({width}x{height} cells at block size {block_size})")]
    GridTooLarge {
        width: u32,
        height: u32,
        block_size: u32,
    },

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode template: {0}")]
    Encode(#[source] image::ImageError),
}

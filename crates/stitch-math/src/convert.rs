//! Conversions between grid cell counts and physical dimensions.
//!
//! The math is unit-agnostic: the same stitch size drives both directions,
//! and the unit only matters when formatting for display.

use thiserror::Error;
use tracing::warn;

/// Grid dimensions used when the caller supplies an unusable scale factor.
pub const FALLBACK_GRID: (u32, u32) = (20, 50);

#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    #[error("stitch size must be positive (got {0})")]
    InvalidStitchSize(f64),
}

/// Physical length spanned by `pixel_count` cells at `stitch_size` per cell.
pub fn physical_size(pixel_count: u32, stitch_size: f64) -> f64 {
    pixel_count as f64 * stitch_size
}

/// Number of cells needed to span `physical` at `stitch_size` per cell.
///
/// Returns the unrounded estimate; use [`round_cells`] for grid dimensions.
pub fn pixel_count(physical: f64, stitch_size: f64) -> Result<f64, ConvertError> {
    if !stitch_size.is_finite() || stitch_size <= 0.0 {
        return Err(ConvertError::InvalidStitchSize(stitch_size));
    }
    Ok(physical / stitch_size)
}

/// Round a cell estimate to a whole count for grid use.
pub fn round_cells(estimate: f64) -> u32 {
    estimate.round().max(0.0) as u32
}

/// Derive grid dimensions by dividing the original resolution by a scale
/// factor, truncating to whole cells.
///
/// A non-positive or non-finite factor falls back to [`FALLBACK_GRID`] with
/// a warning; this is the one recoverable input the converter absorbs
/// instead of erroring.
pub fn derive_grid_from_scale(
    original_width: u32,
    original_height: u32,
    scale_factor: f64,
) -> (u32, u32) {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        warn!(scale_factor, "Scale factor must be positive, using fallback grid");
        return FALLBACK_GRID;
    }
    let width = (original_width as f64 / scale_factor).floor() as u32;
    let height = (original_height as f64 / scale_factor).floor() as u32;
    (width, height)
}

//! Stitch and grid arithmetic for crochet templates.
//!
//! Pure conversions between pixel-grid cell counts and physical craft
//! dimensions, plus the display formatting the host UI shows next to a
//! rendered template.

pub mod convert;
pub mod unit;

// Re-exports for convenience
pub use convert::{
    ConvertError, FALLBACK_GRID, derive_grid_from_scale, physical_size, pixel_count, round_cells,
};
pub use unit::{Unit, format_cells, format_physical};

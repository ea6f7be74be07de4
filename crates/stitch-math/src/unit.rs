//! Measurement units and display formatting.

use serde::{Deserialize, Serialize};

/// Unit system for stitch sizes and finished dimensions.
///
/// Purely cosmetic: both directions of the conversion math are unit-agnostic
/// and only the displayed suffix changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Centimeters,
    Inches,
}

impl Unit {
    /// Suffix shown after formatted physical sizes.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Centimeters => "cm",
            Self::Inches => "inches",
        }
    }

    /// Typical stitch size used to pre-fill the host form.
    pub fn default_stitch_size(&self) -> f64 {
        match self {
            Self::Centimeters => 0.5,
            Self::Inches => 0.2,
        }
    }

    /// Default desired finished size for the reverse calculator.
    pub fn default_desired_size(&self) -> f64 {
        match self {
            Self::Centimeters => 10.0,
            Self::Inches => 4.0,
        }
    }
}

/// Format a physical size to two decimals with the unit suffix.
pub fn format_physical(value: f64, unit: Unit) -> String {
    format!("{value:.2} {}", unit.suffix())
}

/// Format a cell-count estimate to zero decimals.
pub fn format_cells(value: f64) -> String {
    format!("{value:.0}")
}

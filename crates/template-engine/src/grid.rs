//! Validated grid dimensions.

use serde::{Deserialize, Serialize};

use crate::error::TemplateError;

/// Target number of grid cells along each axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    /// Create a grid spec, rejecting zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, TemplateError> {
        if width == 0 || height == 0 {
            return Err(TemplateError::InvalidGrid { width, height });
        }
        Ok(Self { width, height })
    }
}

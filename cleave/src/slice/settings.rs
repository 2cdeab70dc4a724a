use super::error::{Result, SliceError};
use super::plane::Tolerance;
use super::texture_region::TextureRegion;
use serde::{Deserialize, Serialize};

/// Slicing parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliceSettings {
    /// Submesh that receives the cross-section cap. `None`, or an index past the last submesh,
    /// appends the cap as a new trailing submesh.
    pub cross_section_material_index: Option<u32>,
    /// Close the cut with a cap. When off, both hulls are left open.
    pub generate_cross_section: bool,
    /// Part of the texture the cap's coordinates are mapped into.
    pub texture_region: TextureRegion,
    /// Classification and intersection tolerances.
    pub tolerance: Tolerance,
}

impl Default for SliceSettings {
    fn default() -> Self {
        Self {
            cross_section_material_index: None,
            generate_cross_section: true,
            texture_region: TextureRegion::FULL,
            tolerance: Tolerance::default(),
        }
    }
}

impl SliceSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.tolerance.side.is_finite() || self.tolerance.side < 0.0 {
            return Err(SliceError::InvalidSettings("tolerance.side must be a non-negative number".into()));
        }
        if !self.tolerance.segment.is_finite() || self.tolerance.segment < 0.0 {
            return Err(SliceError::InvalidSettings("tolerance.segment must be a non-negative number".into()));
        }
        if !self.texture_region.is_finite() {
            return Err(SliceError::InvalidSettings("texture_region must be finite".into()));
        }
        Ok(())
    }
}

// Cloud layout.
//
// Places rectangles one at a time around a fixed center:
// - Candidates come from an outward Archimedean spiral
// - The first candidate that overlaps nothing wins
// - The winner is then pulled toward the center, X first, then Y
// - Placed rectangles are never moved again
//
// Submodules:
// - spiral: candidate anchor generator
// - spatial_grid: optional bucketed overlap detection
// - cloud: the layouter itself

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

mod cloud;
mod spatial_grid;
mod spiral;

pub use cloud::{layout_cloud, CloudLayouter};
pub use spatial_grid::SpatialGrid;
pub use spiral::Spiral;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Angle added per spiral sample, in radians.
    pub spiral_step: f64,
    /// Radius gained per radian of spiral angle.
    pub spiral_spacing: f64,
    /// Use a spatial hash grid with this cell size for overlap checks.
    /// `None` scans the whole history, which is fine for small clouds.
    pub grid_cell_size: Option<i32>,
    /// Give up after this many spiral samples in a single placement.
    /// Diagnostic only; `None` searches until a slot is found.
    pub max_search_steps: Option<usize>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spiral_step: 0.5,
            spiral_spacing: 1.0,
            grid_cell_size: None,
            max_search_steps: None,
        }
    }
}

impl LayoutConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.spiral_step.is_finite() || self.spiral_step <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "spiral_step must be positive, got {}",
                self.spiral_step
            )));
        }
        if !self.spiral_spacing.is_finite() || self.spiral_spacing <= 0.0 {
            return Err(LayoutError::InvalidConfig(format!(
                "spiral_spacing must be positive, got {}",
                self.spiral_spacing
            )));
        }
        if let Some(cell) = self.grid_cell_size {
            if cell <= 0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "grid_cell_size must be positive, got {cell}"
                )));
            }
        }
        if self.max_search_steps == Some(0) {
            return Err(LayoutError::InvalidConfig(
                "max_search_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

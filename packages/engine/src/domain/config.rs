//! World constants, loadable from a JSON bundle
//!
//! ```json
//! { "width": 256, "height": 192, "brushSize": 6, "fallDistance": 4 }
//! ```
//!
//! Missing keys take the defaults below. `gravity` is accepted as an alias
//! of `fallDistance`. Unknown keys are rejected.

use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: u32 = 1000;
pub const DEFAULT_HEIGHT: u32 = 1000;
pub const DEFAULT_BRUSH_SIZE: u32 = 10;
pub const DEFAULT_FALL_DISTANCE: u32 = 10;

/// Largest width or height. Coordinates are carried as `i32`.
pub const MAX_DIMENSION: u32 = i32::MAX as u32;

/// Nearest size that passes `validate`: each side in `1..=MAX_DIMENSION`,
/// height shrunk until `width * height` fits in a `u32`.
pub fn clamp_size(width: u32, height: u32) -> (u32, u32) {
    let width = width.clamp(1, MAX_DIMENSION);
    let height = height.clamp(1, MAX_DIMENSION.min(u32::MAX / width));
    (width, height)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Side of the square paint stamp
    pub brush_size: u32,
    /// Max rows a grain searches below itself per step
    #[serde(alias = "gravity")]
    pub fall_distance: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            brush_size: DEFAULT_BRUSH_SIZE,
            fall_distance: DEFAULT_FALL_DISTANCE,
        }
    }
}

impl SimConfig {
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "grid dimensions must be non-zero: {}x{}",
                self.width, self.height
            ));
        }
        // Coordinates are carried as i32 and the JS side indexes with u32.
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(format!("grid dimensions too large: {}x{}", self.width, self.height));
        }
        if self.width.checked_mul(self.height).is_none() {
            return Err(format!(
                "grid has too many cells: {}x{}",
                self.width, self.height
            ));
        }
        if self.brush_size == 0 {
            return Err("brushSize must be at least 1".to_string());
        }
        Ok(())
    }
}

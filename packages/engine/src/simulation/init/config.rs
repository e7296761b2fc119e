use serde::{Deserialize, Serialize};

use crate::domain::elements::AMBIENT_TEMPERATURE;

/// Simulation settings, read from camelCase JSON
///
/// ```json
/// { "width": 512, "height": 512, "bands": 16, "strips": 8, "seed": 42 }
/// ```
/// Missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    /// Requested horizontal bands; clamped so every band has at least 2 rows
    pub bands: u32,
    /// Requested strips per band; clamped to twice the widest horizontal reach
    pub strips: u32,
    pub seed: u64,
    pub ambient_temperature: f32,
    /// Temperature mapped to the cold end of the heatmap ramp
    pub heatmap_min: f32,
    /// Temperature mapped to the hot end of the heatmap ramp
    pub heatmap_max: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            bands: 16,
            strips: 8,
            seed: 0x5EED_F00D,
            ambient_temperature: AMBIENT_TEMPERATURE,
            heatmap_min: -20.0,
            heatmap_max: 1200.0,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SimConfig =
            serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    /// Default settings for a `width` x `height` grid. Dimensions are clamped
    /// to at least 1 and to a cell count that fits in i32.
    pub fn with_size(width: u32, height: u32) -> Self {
        let max_cells = i32::MAX as u32;
        let w = width.clamp(1, max_cells);
        let h = height.clamp(1, max_cells / w);
        if (w, h) != (width, height) {
            log::warn!("grid {}x{} clamped to {}x{}", width, height, w, h);
        }
        Self {
            width: w,
            height: h,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!(
                "Grid dimensions must be non-zero (got {}x{})",
                self.width, self.height
            ));
        }
        if (self.width as u64) * (self.height as u64) > i32::MAX as u64 {
            return Err(format!("Grid {}x{} is too large", self.width, self.height));
        }
        if !self.ambient_temperature.is_finite() {
            return Err("ambientTemperature must be finite".to_string());
        }
        if !self.heatmap_min.is_finite() || !self.heatmap_max.is_finite() {
            return Err("heatmap range must be finite".to_string());
        }
        if self.heatmap_max <= self.heatmap_min {
            return Err(format!(
                "heatmapMax ({}) must be greater than heatmapMin ({})",
                self.heatmap_max, self.heatmap_min
            ));
        }
        Ok(())
    }
}

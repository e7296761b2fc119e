use wasm_bindgen::prelude::*;

use super::perf_stats::PerfStats;
use super::WorldCore;

/// JS-facing handle around [`WorldCore`]
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and the built-in materials
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a JSON config and an optional JSON content bundle
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(config: &str, bundle: Option<String>) -> Result<World, JsValue> {
        let core = WorldCore::from_json(config, bundle.as_deref()).map_err(|e| {
            log::error!("world creation failed: {}", e);
            JsValue::from_str(&e)
        })?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Paint an element around (x, y); returns the number of cells written
    pub fn spawn(&mut self, x: i32, y: i32, element: u16) -> u32 {
        self.core.spawn(x, y, element)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn load_content_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_content_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_content_manifest_json(&self) -> String {
        self.core.get_content_manifest_json()
    }

    // === Render handoff ===

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    pub fn types_ptr(&self) -> *const u16 {
        self.core.types_ptr()
    }

    pub fn temperature_ptr(&self) -> *const f32 {
        self.core.temperature_ptr()
    }

    /// Redraw the heatmap and get its pointer (same length as colors)
    pub fn heatmap_ptr(&mut self) -> *const u32 {
        self.core.heatmap_ptr()
    }

    pub fn draw_elements(&self, target: &mut [u32]) -> bool {
        self.core.draw_elements(target)
    }

    pub fn draw_heatmap(&self, target: &mut [u32]) -> bool {
        self.core.draw_heatmap(target)
    }

    // === Queries ===

    pub fn element_at(&self, x: i32, y: i32) -> u16 {
        self.core.element_at(x, y)
    }

    pub fn name_at(&self, x: i32, y: i32) -> String {
        self.core.name_at(x, y)
    }

    pub fn temperature_at(&self, x: i32, y: i32) -> f32 {
        self.core.temperature_at(x, y)
    }

    // === Persistence ===

    /// Serialize the grid into a snapshot byte array
    pub fn save(&self) -> Result<Vec<u8>, JsValue> {
        let mut bytes = Vec::new();
        self.core
            .save(&mut bytes)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(bytes)
    }

    /// Restore a snapshot produced by `save`
    pub fn load(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let mut reader = bytes;
        self.core
            .load(&mut reader)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl World {
    /// Native access to the simulation behind the handle
    pub fn core(&self) -> &WorldCore {
        &self.core
    }
}

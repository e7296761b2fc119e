use wasm_bindgen::prelude::*;

/// Timings and counters of the last step
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) temperature_ms: f64,
    pub(super) update_ms: f64,
    pub(super) heat_cells: u32,
    pub(super) cells_processed: u32,
    pub(super) swaps: u32,
    pub(super) rules_applied: u32,
    pub(super) non_empty_cells: u32,
    pub(super) grid_size: u32,
    pub(super) tasks: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn temperature_ms(&self) -> f64 { self.temperature_ms }
    #[wasm_bindgen(getter)]
    pub fn update_ms(&self) -> f64 { self.update_ms }
    #[wasm_bindgen(getter)]
    pub fn heat_cells(&self) -> u32 { self.heat_cells }
    #[wasm_bindgen(getter)]
    pub fn cells_processed(&self) -> u32 { self.cells_processed }
    #[wasm_bindgen(getter)]
    pub fn swaps(&self) -> u32 { self.swaps }
    #[wasm_bindgen(getter)]
    pub fn rules_applied(&self) -> u32 { self.rules_applied }
    #[wasm_bindgen(getter)]
    pub fn non_empty_cells(&self) -> u32 { self.non_empty_cells }
    #[wasm_bindgen(getter)]
    pub fn grid_size(&self) -> u32 { self.grid_size }
    #[wasm_bindgen(getter)]
    pub fn tasks(&self) -> u32 { self.tasks }
}

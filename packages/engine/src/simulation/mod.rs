//! World - the falling-sand simulation
//!
//! WorldCore only orchestrates; the per-cell logic lives in systems/:
//! - heat diffusion in systems/temperature
//! - transformation rules in systems/reactions
//! - gravity movement in systems/behaviors
//!
//! Every tick runs reset -> heat -> rules + gravity over the band/strip
//! partition (spatial/partition), one worker per task.

use std::io::{Read, Write};
use std::sync::Arc;

use rand::rngs::SmallRng;

use crate::domain::content::ContentRegistry;
use crate::domain::elements::ElementId;
use crate::persistence::snapshot::{self, SnapshotError};
use crate::spatial::grid::Grid;
use crate::spatial::partition::Partition;
use crate::systems::behaviors::BehaviorRegistry;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/config.rs"]
mod config;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/update.rs"]
mod update;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod facade;

pub use config::SimConfig;
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::heat_color;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    content: Arc<ContentRegistry>,
    grid: Grid,
    behaviors: BehaviorRegistry,
    partition: Partition,
    config: SimConfig,

    // State
    rng: SmallRng,
    frame: u64,

    // Heatmap pixels handed to JS (refreshed on demand)
    heatmap: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with given dimensions, default settings and the built-in materials
    pub fn new(width: u32, height: u32) -> Self {
        let content = Arc::new(ContentRegistry::builtin());
        match Self::with_config(SimConfig::with_size(width, height), Arc::clone(&content)) {
            Ok(world) => world,
            Err(e) => {
                log::error!("default world rejected: {}", e);
                init::create_world_core(SimConfig::default(), content)
            }
        }
    }

    /// Create a world from explicit settings and content
    pub fn with_config(config: SimConfig, content: Arc<ContentRegistry>) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_world_core(config, content))
    }

    /// Create a world from a JSON config and an optional JSON content bundle
    pub fn from_json(config_json: &str, bundle_json: Option<&str>) -> Result<Self, String> {
        let config = SimConfig::from_json(config_json)?;
        let content = match bundle_json {
            Some(json) => ContentRegistry::from_bundle_json(json)?,
            None => ContentRegistry::builtin(),
        };
        Self::with_config(config, Arc::new(content))
    }

    /// Swap the material catalog. The grid is rebuilt empty.
    pub fn load_content_bundle_json(&mut self, json: &str) -> Result<(), String> {
        let registry = ContentRegistry::from_bundle_json(json)?;
        init::replace_content(self, Arc::new(registry));
        Ok(())
    }

    pub fn get_content_manifest_json(&self) -> String {
        self.content.manifest_json()
    }

    pub fn content(&self) -> &ContentRegistry {
        &self.content
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Paint `element` around (x, y) with the brush of its type.
    /// Returns the number of cells written.
    pub fn spawn(&mut self, x: i32, y: i32, element: ElementId) -> u32 {
        commands::spawn(self, x, y, element)
    }

    /// Clear all cells
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Render handoff ===

    /// Copy the color buffer into `target` (length must equal the cell count)
    pub fn draw_elements(&self, target: &mut [u32]) -> bool {
        render_extract::draw_elements(self, target)
    }

    /// Map temperatures through the heat ramp into `target`
    pub fn draw_heatmap(&self, target: &mut [u32]) -> bool {
        render_extract::draw_heatmap(self, target)
    }

    /// Refresh the internal heatmap buffer and return its pointer (for JS)
    pub fn heatmap_ptr(&mut self) -> *const u32 {
        render_extract::refresh_heatmap(self)
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.grid.size()
    }

    /// Get pointer to element ids (one u16 per cell)
    pub fn types_ptr(&self) -> *const u16 {
        self.grid.types_ptr()
    }

    /// Get pointer to temperatures (one f32 per cell)
    pub fn temperature_ptr(&self) -> *const f32 {
        self.grid.temperature_ptr()
    }

    // === Queries ===

    pub fn element_at(&self, x: i32, y: i32) -> ElementId {
        self.grid.id(x, y)
    }

    pub fn name_at(&self, x: i32, y: i32) -> String {
        self.grid.name(x, y).to_string()
    }

    pub fn temperature_at(&self, x: i32, y: i32) -> f32 {
        self.grid.temperature(x, y)
    }

    pub fn count_of(&self, element: ElementId) -> usize {
        self.grid.count_of(element)
    }

    // === Persistence ===

    pub fn save<W: Write>(&self, writer: &mut W) -> Result<(), SnapshotError> {
        snapshot::write_grid(&self.grid, writer)
    }

    /// Restore a snapshot; on error the world is left unchanged
    pub fn load<R: Read>(&mut self, reader: &mut R) -> Result<(), SnapshotError> {
        snapshot::read_grid(&mut self.grid, reader)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;

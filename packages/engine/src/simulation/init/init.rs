use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::domain::content::ContentRegistry;
use crate::spatial::grid::Grid;
use crate::spatial::partition::Partition;
use crate::systems::behaviors::BehaviorRegistry;

use super::perf_stats::PerfStats;
use super::{SimConfig, WorldCore};

pub(super) fn create_world_core(config: SimConfig, content: Arc<ContentRegistry>) -> WorldCore {
    let grid = Grid::with_ambient(
        config.width,
        config.height,
        Arc::clone(&content),
        config.ambient_temperature,
    );
    let partition = build_partition(&config, &content);
    log::info!(
        "world {}x{} ready: {} elements, {} bands x {} strips, seed {}",
        config.width,
        config.height,
        content.element_count(),
        partition.band_count(),
        partition.strip_count(),
        config.seed
    );

    WorldCore {
        rng: SmallRng::seed_from_u64(config.seed),
        heatmap: Vec::new(),
        content,
        grid,
        behaviors: BehaviorRegistry::new(),
        partition,
        config,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Install a new catalog; grid and partition depend on it and are rebuilt
pub(super) fn replace_content(world: &mut WorldCore, content: Arc<ContentRegistry>) {
    world.grid = Grid::with_ambient(
        world.config.width,
        world.config.height,
        Arc::clone(&content),
        world.config.ambient_temperature,
    );
    world.partition = build_partition(&world.config, &content);
    world.content = content;
    world.frame = 0;
}

fn build_partition(config: &SimConfig, content: &ContentRegistry) -> Partition {
    Partition::new(
        config.width,
        config.height,
        config.bands,
        config.strips,
        u32::from(content.max_dispersion()),
    )
}

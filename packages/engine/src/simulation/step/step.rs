use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::domain::elements::EL_EMPTY;
use crate::spatial::grid::{Grid, GridView};
use crate::spatial::partition::{Partition, Task};
use crate::systems::temperature::diffuse_task;
use crate::systems::TaskStats;

use super::update::update_task;
use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let mut timer = perf_on.then(PerfTimer::start);

    // 1. Reset: every cell may act once this tick
    world.grid.reset_moved();

    // 2. Heat diffusion
    let heat = run_pass(&mut world.grid, &world.partition, &mut world.rng, |view, task, _| {
        diffuse_task(view, task)
    });
    let temperature_ms = timer.as_mut().map_or(0.0, PerfTimer::lap);

    // 3. Rules + gravity
    let behaviors = &world.behaviors;
    let update = run_pass(&mut world.grid, &world.partition, &mut world.rng, |view, task, rng| {
        update_task(view, task, rng, behaviors)
    });

    if let Some(timer) = timer.as_mut() {
        let update_ms = timer.lap();
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.temperature_ms = temperature_ms;
        stats.update_ms = update_ms;
        stats.heat_cells = heat.cells_processed;
        stats.cells_processed = update.cells_processed;
        stats.swaps = update.swaps;
        stats.rules_applied = update.rules_applied;
        stats.grid_size = world.grid.size() as u32;
        stats.tasks = world.partition.waves().iter().map(Vec::len).sum::<usize>() as u32;
        stats.non_empty_cells = world
            .grid
            .types()
            .iter()
            .filter(|&&t| t != EL_EMPTY)
            .count() as u32;
        stats.step_ms = timer.total_ms();
    }

    // 4. End of tick
    world.frame += 1;
}

/// Run `pass` over every task, wave after wave.
///
/// Before each wave the master RNG hands one seed to every task, so the
/// outcome depends on the seed and the partition, never on thread timing.
fn run_pass<F>(grid: &mut Grid, partition: &Partition, rng: &mut SmallRng, pass: F) -> TaskStats
where
    F: Fn(GridView<'_>, &Task, &mut SmallRng) -> TaskStats + Sync,
{
    let view = grid.view();
    let mut total = TaskStats::default();
    for wave in partition.waves().iter() {
        let seeds: Vec<u64> = wave.iter().map(|_| rng.gen()).collect();
        total = total.merged(run_wave(view, wave, &seeds, &pass));
    }
    total
}

#[cfg(feature = "parallel")]
fn run_wave<F>(view: GridView<'_>, wave: &[Task], seeds: &[u64], pass: &F) -> TaskStats
where
    F: Fn(GridView<'_>, &Task, &mut SmallRng) -> TaskStats + Sync,
{
    wave.par_iter()
        .zip(seeds.par_iter())
        .map(|(task, &seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            pass(view, task, &mut rng)
        })
        .reduce(TaskStats::default, TaskStats::merged)
}

#[cfg(not(feature = "parallel"))]
fn run_wave<F>(view: GridView<'_>, wave: &[Task], seeds: &[u64], pass: &F) -> TaskStats
where
    F: Fn(GridView<'_>, &Task, &mut SmallRng) -> TaskStats + Sync,
{
    wave.iter()
        .zip(seeds)
        .map(|(task, &seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            pass(view, task, &mut rng)
        })
        .fold(TaskStats::default(), TaskStats::merged)
}
